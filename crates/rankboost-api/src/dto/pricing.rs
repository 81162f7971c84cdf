//! Pricing DTOs
//!
//! Request and response types for the price-preview endpoints.

use chrono::{DateTime, Utc};
use rankboost_core::models::{Division, Quote, Rank, Tier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Price calculation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    /// Current rank identifier (e.g., "BRONZE_III")
    #[serde(alias = "startRank")]
    #[validate(length(min = 1, max = 32, message = "Start rank is required"))]
    pub start_rank: String,

    /// Desired rank identifier (e.g., "DIAMOND_III")
    #[serde(alias = "endRank")]
    #[validate(length(min = 1, max = 32, message = "End rank is required"))]
    pub end_rank: String,
}

/// Price calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub start_rank: Rank,
    pub end_rank: Rank,
    /// Ladder steps between the two ranks
    pub ordinal_difference: i32,
    pub base_price: Decimal,
    pub rank_multiplier: Decimal,
    pub special_rank_fee: Decimal,
    pub final_price: Decimal,
    pub estimated_hours: u32,
    /// When this preview was produced
    pub calculated_at: DateTime<Utc>,
}

impl QuoteResponse {
    pub fn new(start: Rank, end: Rank, quote: Quote) -> Self {
        Self {
            start_rank: start,
            end_rank: end,
            ordinal_difference: start.steps_to(end),
            base_price: quote.base_price.normalize(),
            rank_multiplier: quote.rank_multiplier.normalize(),
            special_rank_fee: quote.special_rank_fee.normalize(),
            final_price: quote.final_price.normalize(),
            estimated_hours: quote.estimated_hours,
            calculated_at: Utc::now(),
        }
    }
}

/// One rung of the ladder
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub rank: Rank,
    pub ordinal: u8,
    pub tier_index: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<Division>,
    pub special: bool,
}

impl From<Rank> for RankResponse {
    fn from(rank: Rank) -> Self {
        Self {
            rank,
            ordinal: rank.ordinal(),
            tier_index: rank.tier_index(),
            tier: rank.tier(),
            division: rank.division(),
            special: rank.is_special(),
        }
    }
}

//! Quote model
//!
//! The result of pricing a rank progression.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price and time estimate for a single rank progression
///
/// A quote is a computed value. It carries no identity and is never stored by
/// the pricing engine; order management embeds the figures it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Ordinal distance times the unit rate
    pub base_price: Decimal,

    /// 1 + tier distance times the tier coefficient
    pub rank_multiplier: Decimal,

    /// Surcharge for landing on a special rank (zero otherwise)
    pub special_rank_fee: Decimal,

    /// base_price * rank_multiplier + special_rank_fee, unrounded
    pub final_price: Decimal,

    /// Ordinal distance times hours per step
    pub estimated_hours: u32,
}

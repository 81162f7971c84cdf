//! Domain models for RankBoost
//!
//! The rank ladder is static reference data; quotes and rates are plain
//! values computed or loaded at startup and never mutated afterwards.

pub mod quote;
pub mod rank;
pub mod rates;

pub use quote::Quote;
pub use rank::{Division, Rank, Tier, LADDER};
pub use rates::PricingRates;

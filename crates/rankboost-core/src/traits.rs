//! Common traits for services
//!
//! Defines the abstraction the HTTP layer and order workflows price through.

use crate::error::PricingError;
use crate::models::{Quote, Rank};

/// Pricing service trait
///
/// Implementations are pure: the same pair of ranks always yields the same
/// quote, and no call affects any other.
pub trait PricingService: Send + Sync {
    /// Quote a progression from `start` up to `end`
    fn quote(&self, start: Rank, end: Rank) -> Result<Quote, PricingError>;

    /// Quote a progression given wire identifiers (e.g. `"GOLD_III"`)
    fn quote_by_name(&self, start: &str, end: &str) -> Result<Quote, PricingError> {
        let start: Rank = start.parse()?;
        let end: Rank = end.parse()?;
        self.quote(start, end)
    }
}

//! Pricing engine implementation
//!
//! Turns a requested progression between two ranks into a quote. The price
//! grows with the number of ladder steps, is inflated by the number of tiers
//! crossed, and picks up a flat surcharge when the destination is a special
//! rank. No rounding is applied here.

use rankboost_core::{
    models::{PricingRates, Quote, Rank},
    traits::PricingService,
    AppResult, PricingError,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Stateless pricing engine
///
/// Holds only its rates, so it can be cloned or shared behind `Arc` without
/// any synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    rates: PricingRates,
}

impl PricingEngine {
    /// Create an engine with the given rates
    ///
    /// Fails with `AppError::Config` for rates that `PricingRates::validate`
    /// refuses, so a constructed engine never overflows while quoting.
    pub fn new(rates: PricingRates) -> AppResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// 1 + tiers crossed * tier coefficient
    fn rank_multiplier(&self, start: Rank, end: Rank) -> Decimal {
        let tier_difference = i32::from(end.tier_index()) - i32::from(start.tier_index());
        Decimal::ONE + Decimal::from(tier_difference) * self.rates.tier_coefficient
    }

    /// Surcharge keyed only on the destination rank
    fn special_rank_fee(&self, end: Rank) -> Decimal {
        match end {
            Rank::Eternity => self.rates.first_special_fee,
            Rank::OneAboveAll => self.rates.second_special_fee,
            _ => Decimal::ZERO,
        }
    }

    fn estimated_hours(&self, steps: u32) -> u32 {
        steps * self.rates.hours_per_step
    }
}

impl PricingService for PricingEngine {
    #[instrument(skip(self), level = "debug")]
    fn quote(&self, start: Rank, end: Rank) -> Result<Quote, PricingError> {
        if end.ordinal() <= start.ordinal() {
            debug!(%start, %end, "Rejecting progression that does not go up the ladder");
            return Err(PricingError::InvalidProgression { start, end });
        }

        let steps = u32::from(end.ordinal() - start.ordinal());
        let base_price = Decimal::from(steps) * self.rates.unit_rate;
        let rank_multiplier = self.rank_multiplier(start, end);
        let special_rank_fee = self.special_rank_fee(end);
        let estimated_hours = self.estimated_hours(steps);
        let final_price = base_price * rank_multiplier + special_rank_fee;

        debug!(
            steps,
            %base_price,
            %rank_multiplier,
            %special_rank_fee,
            %final_price,
            estimated_hours,
            "Quoted progression"
        );

        Ok(Quote {
            base_price,
            rank_multiplier,
            special_rank_fee,
            final_price,
            estimated_hours,
        })
    }
}

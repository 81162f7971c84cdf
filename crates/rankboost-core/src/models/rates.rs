//! Pricing rates
//!
//! The coefficients the pricing engine applies to a progression. The
//! canonical values are the defaults; deployments may override them through
//! configuration.

use crate::error::AppError;
use crate::models::Rank;
use crate::AppResult;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Price per ordinal step
pub const UNIT_RATE: Decimal = dec!(10);

/// Multiplier increment per tier crossed
pub const TIER_COEFFICIENT: Decimal = dec!(0.5);

/// Estimated hours per ordinal step
pub const HOURS_PER_STEP: u32 = 2;

/// Surcharge for ending at the first special rank
pub const FIRST_SPECIAL_FEE: Decimal = dec!(250);

/// Surcharge for ending at the second special rank
pub const SECOND_SPECIAL_FEE: Decimal = dec!(500);

/// Rates used to compute a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRates {
    pub unit_rate: Decimal,
    pub tier_coefficient: Decimal,
    pub hours_per_step: u32,
    pub first_special_fee: Decimal,
    pub second_special_fee: Decimal,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            unit_rate: UNIT_RATE,
            tier_coefficient: TIER_COEFFICIENT,
            hours_per_step: HOURS_PER_STEP,
            first_special_fee: FIRST_SPECIAL_FEE,
            second_special_fee: SECOND_SPECIAL_FEE,
        }
    }
}

impl PricingRates {
    /// Check the rates keep quotes well-formed
    ///
    /// A negative tier coefficient would let the multiplier drop below 1, and
    /// the second special rank must always cost more than the first.
    pub fn validate(&self) -> AppResult<()> {
        if self.unit_rate.is_sign_negative() {
            return Err(AppError::Config(format!(
                "unit_rate must not be negative, got {}",
                self.unit_rate
            )));
        }
        if self.tier_coefficient.is_sign_negative() {
            return Err(AppError::Config(format!(
                "tier_coefficient must not be negative, got {}",
                self.tier_coefficient
            )));
        }
        if self.first_special_fee.is_sign_negative() {
            return Err(AppError::Config(format!(
                "first_special_fee must not be negative, got {}",
                self.first_special_fee
            )));
        }
        if self.second_special_fee <= self.first_special_fee {
            return Err(AppError::Config(format!(
                "second_special_fee ({}) must be greater than first_special_fee ({})",
                self.second_special_fee, self.first_special_fee
            )));
        }
        self.check_widest_progression()
    }

    /// Quote arithmetic must not overflow even for the longest climb on the
    /// ladder, which also crosses the most tiers and pays the largest fee.
    fn check_widest_progression(&self) -> AppResult<()> {
        let (lowest, highest) = (Rank::BronzeIII, Rank::OneAboveAll);
        let max_steps = u32::from(highest.ordinal() - lowest.ordinal());
        let max_tiers = highest.tier_index() - lowest.tier_index();

        if max_steps.checked_mul(self.hours_per_step).is_none() {
            return Err(AppError::Config(format!(
                "hours_per_step {} overflows the estimate for {} steps",
                self.hours_per_step, max_steps
            )));
        }

        let max_price = Decimal::from(max_tiers)
            .checked_mul(self.tier_coefficient)
            .and_then(|tiers| tiers.checked_add(Decimal::ONE))
            .and_then(|multiplier| {
                self.unit_rate
                    .checked_mul(Decimal::from(max_steps))
                    .and_then(|base| base.checked_mul(multiplier))
            })
            .and_then(|price| price.checked_add(self.second_special_fee));

        if max_price.is_none() {
            return Err(AppError::Config(format!(
                "rates overflow the price of a {} -> {} progression",
                lowest, highest
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_are_canonical() {
        let rates = PricingRates::default();
        assert_eq!(rates.unit_rate, dec!(10));
        assert_eq!(rates.tier_coefficient, dec!(0.5));
        assert_eq!(rates.hours_per_step, 2);
        assert_eq!(rates.first_special_fee, dec!(250));
        assert_eq!(rates.second_special_fee, dec!(500));
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_negative_coefficient_rejected() {
        let rates = PricingRates {
            tier_coefficient: dec!(-0.1),
            ..Default::default()
        };
        assert!(matches!(rates.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_negative_unit_rate_rejected() {
        let rates = PricingRates {
            unit_rate: dec!(-1),
            ..Default::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_special_fees_must_be_ordered() {
        let rates = PricingRates {
            first_special_fee: dec!(500),
            second_special_fee: dec!(500),
            ..Default::default()
        };
        assert!(rates.validate().is_err());

        let rates = PricingRates {
            first_special_fee: dec!(-5),
            second_special_fee: dec!(10),
            ..Default::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_hours_per_step_bounded() {
        let rates = PricingRates {
            hours_per_step: u32::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(rates.validate(), Err(AppError::Config(_))));

        let rates = PricingRates {
            hours_per_step: u32::MAX / 19,
            ..Default::default()
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_price_overflow_rejected() {
        let rates = PricingRates {
            unit_rate: dec!(10000000000000000000000000000),
            ..Default::default()
        };
        assert!(matches!(rates.validate(), Err(AppError::Config(_))));

        let rates = PricingRates {
            tier_coefficient: dec!(10000000000000000000000000000),
            ..Default::default()
        };
        assert!(rates.validate().is_err());

        let rates = PricingRates {
            second_special_fee: Decimal::MAX,
            ..Default::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_zero_rates_allowed() {
        let rates = PricingRates {
            unit_rate: Decimal::ZERO,
            tier_coefficient: Decimal::ZERO,
            hours_per_step: 0,
            first_special_fee: Decimal::ZERO,
            second_special_fee: dec!(1),
        };
        assert!(rates.validate().is_ok());
    }
}

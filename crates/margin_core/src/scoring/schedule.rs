//! Margin schedule: maps a confusion-matrix outcome and an amount to a
//! signed margin.
//!
//! - TN: `base_rate * amount` (commission earned).
//! - FN: `-(fraud_loss.rate_for(amount) * amount)` (fraud absorbed).
//! - FP: `refused_commission_factor * amount * base_rate` (reduced commission).
//! - TP: `0`.
//!
//! Evaluation is pure: no shared mutable state, safe to call from any number
//! of threads at once with bit-identical results for identical inputs.

use std::sync::LazyLock;

use super::error::MarginError;
use super::label::{Label, LabelField, Outcome};
use super::rate_table::RateTable;

/// Commission rate on a correctly accepted legitimate transaction.
pub const BASE_RATE: f64 = 0.05;

/// Share of the commission kept when a legitimate transaction is refused.
pub const REFUSED_COMMISSION_FACTOR: f64 = 0.7;

/// Handling of negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountPolicy {
    /// Negative amounts are rejected with `MarginError::InvalidAmount`.
    #[default]
    Strict,
    /// Negative amounts go through the arithmetic unchanged (legacy rule).
    Passthrough,
}

/// Rates are public for struct-update construction; `base_rate` and
/// `refused_commission_factor` are checked on every evaluation and a
/// non-finite or negative value fails with `MarginError::InvalidRate`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginSchedule {
    pub base_rate: f64,
    pub refused_commission_factor: f64,
    pub fraud_loss: RateTable,
    pub amount_policy: AmountPolicy,
}

impl MarginSchedule {
    pub fn standard() -> Self {
        Self {
            base_rate: BASE_RATE,
            refused_commission_factor: REFUSED_COMMISSION_FACTOR,
            fraud_loss: RateTable::standard_fraud_loss(),
            amount_policy: AmountPolicy::Strict,
        }
    }

    pub fn with_amount_policy(mut self, amount_policy: AmountPolicy) -> Self {
        self.amount_policy = amount_policy;
        self
    }

    /// Margin for a typed (predicted, actual) pair.
    pub fn margin(
        &self,
        amount: f64,
        predicted: Label,
        actual: Label,
    ) -> Result<f64, MarginError> {
        self.margin_for_outcome(amount, Outcome::classify(predicted, actual))
    }

    /// Margin for raw 0/1 indicators. Labels are checked before the amount.
    pub fn margin_from_indicators(
        &self,
        amount: f64,
        predicted: i64,
        actual: i64,
    ) -> Result<f64, MarginError> {
        let predicted = Label::from_indicator(LabelField::Predicted, predicted)
            .inspect_err(|err| tracing::debug!("MarginReject {}", err))?;
        let actual = Label::from_indicator(LabelField::True, actual)
            .inspect_err(|err| tracing::debug!("MarginReject {}", err))?;
        self.margin(amount, predicted, actual)
    }

    pub fn margin_for_outcome(&self, amount: f64, outcome: Outcome) -> Result<f64, MarginError> {
        self.check_rates()?;
        self.check_amount(amount)?;

        let margin = match outcome {
            Outcome::TrueNegative => self.base_rate * amount,
            // Subtracting from +0.0 keeps the zero-rate tier at +0.0.
            Outcome::FalseNegative => 0.0 - self.fraud_loss.rate_for(amount) * amount,
            // Factor and amount first: 0.7 * 100 * 0.05 is exactly 3.5.
            Outcome::FalsePositive => self.refused_commission_factor * amount * self.base_rate,
            Outcome::TruePositive => 0.0,
        };

        tracing::debug!(
            "MarginEvaluated outcome={} amount={} margin={}",
            outcome.as_str(),
            amount,
            margin
        );
        Ok(margin)
    }

    fn check_rates(&self) -> Result<(), MarginError> {
        let rates = [
            ("base_rate", self.base_rate),
            ("refused_commission_factor", self.refused_commission_factor),
        ];
        for (param, value) in rates {
            if !value.is_finite() || value < 0.0 {
                let err = MarginError::InvalidRate { param, value };
                tracing::debug!("MarginReject {}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn check_amount(&self, amount: f64) -> Result<(), MarginError> {
        let rejected = !amount.is_finite()
            || (amount < 0.0 && self.amount_policy == AmountPolicy::Strict);
        if rejected {
            let err = MarginError::InvalidAmount { amount };
            tracing::debug!("MarginReject {} policy={:?}", err, self.amount_policy);
            return Err(err);
        }
        Ok(())
    }
}

impl Default for MarginSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

static DEFAULT_SCHEDULE: LazyLock<MarginSchedule> = LazyLock::new(MarginSchedule::standard);

/// Shared standard schedule (strict amounts).
pub fn default_schedule() -> &'static MarginSchedule {
    &DEFAULT_SCHEDULE
}

/// Evaluate the margin of one transaction with the standard schedule.
pub fn evaluate_margin(amount: f64, predicted: Label, actual: Label) -> Result<f64, MarginError> {
    default_schedule().margin(amount, predicted, actual)
}

/// Same as [`evaluate_margin`] for raw 0/1 label columns.
pub fn evaluate_margin_indicators(
    amount: f64,
    predicted: i64,
    actual: i64,
) -> Result<f64, MarginError> {
    default_schedule().margin_from_indicators(amount, predicted, actual)
}

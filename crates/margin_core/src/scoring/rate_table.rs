//! Tiered loss rates for accepted fraud.
//!
//! **Tiers (standard table):**
//! - amount <= 20 → 0.0
//! - 20 < amount <= 50 → 0.2
//! - 50 < amount <= 100 → 0.3
//! - 100 < amount <= 200 → 0.5
//! - amount > 200 → 0.8
//!
//! Tiers are scanned in ascending order and the first tier whose bound is
//! `>= amount` wins, so a boundary value always lands in the cheaper tier.

use std::fmt;

/// One row of the table. `upper_bound: None` marks the open-ended last tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTier {
    pub upper_bound: Option<f64>,
    pub rate: f64,
}

impl RateTier {
    pub const fn bounded(upper_bound: f64, rate: f64) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: f64) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

const STANDARD_FRAUD_LOSS_TIERS: [RateTier; 5] = [
    RateTier::bounded(20.0, 0.0),
    RateTier::bounded(50.0, 0.2),
    RateTier::bounded(100.0, 0.3),
    RateTier::bounded(200.0, 0.5),
    RateTier::unbounded(0.8),
];

/// Reason a tier list was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTableError {
    Empty,
    NonFiniteBound { index: usize },
    BoundsNotAscending { index: usize },
    UnboundedTierNotLast { index: usize },
    MissingUnboundedTier,
    InvalidRate { index: usize },
    SeverityDecreasing { index: usize },
}

impl fmt::Display for RateTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateTableError::Empty => write!(f, "rate table has no tiers"),
            RateTableError::NonFiniteBound { index } => {
                write!(f, "tier {index}: upper bound is not finite")
            }
            RateTableError::BoundsNotAscending { index } => {
                write!(f, "tier {index}: upper bound must exceed the previous tier's")
            }
            RateTableError::UnboundedTierNotLast { index } => {
                write!(f, "tier {index}: only the last tier may be unbounded")
            }
            RateTableError::MissingUnboundedTier => {
                write!(f, "last tier must be unbounded to cover every amount")
            }
            RateTableError::InvalidRate { index } => {
                write!(f, "tier {index}: rate must be finite and non-negative")
            }
            RateTableError::SeverityDecreasing { index } => {
                write!(f, "tier {index}: rate is lower than the previous tier's")
            }
        }
    }
}

impl std::error::Error for RateTableError {}

/// Validated, ordered list of `(upper_bound, rate)` tiers covering every amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    tiers: Vec<RateTier>,
}

impl RateTable {
    pub fn new(tiers: Vec<RateTier>) -> Result<Self, RateTableError> {
        if tiers.is_empty() {
            return Err(RateTableError::Empty);
        }

        let last = tiers.len() - 1;
        let mut prev_bound: Option<f64> = None;
        let mut prev_rate: Option<f64> = None;
        for (index, tier) in tiers.iter().enumerate() {
            if !tier.rate.is_finite() || tier.rate < 0.0 {
                return Err(RateTableError::InvalidRate { index });
            }
            if prev_rate.is_some_and(|prev| tier.rate < prev) {
                return Err(RateTableError::SeverityDecreasing { index });
            }
            prev_rate = Some(tier.rate);

            match tier.upper_bound {
                Some(bound) => {
                    if !bound.is_finite() {
                        return Err(RateTableError::NonFiniteBound { index });
                    }
                    if prev_bound.is_some_and(|prev| bound <= prev) {
                        return Err(RateTableError::BoundsNotAscending { index });
                    }
                    if index == last {
                        return Err(RateTableError::MissingUnboundedTier);
                    }
                    prev_bound = Some(bound);
                }
                None if index != last => {
                    return Err(RateTableError::UnboundedTierNotLast { index });
                }
                None => {}
            }
        }

        Ok(Self { tiers })
    }

    /// The 0 / 20% / 30% / 50% / 80% ladder with bounds 20, 50, 100, 200.
    pub fn standard_fraud_loss() -> Self {
        Self {
            tiers: STANDARD_FRAUD_LOSS_TIERS.to_vec(),
        }
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Rate of the first tier whose bound is `>= amount`.
    ///
    /// Amounts below the first bound (negative ones included) take the first
    /// tier. Validation guarantees the last tier is open-ended.
    pub fn rate_for(&self, amount: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.upper_bound.is_none_or(|bound| amount <= bound))
            .map_or(0.0, |tier| tier.rate)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard_fraud_loss()
    }
}

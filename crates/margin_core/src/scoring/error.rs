use std::fmt;

use super::label::LabelField;

/// Input rejected before the margin case split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginError {
    /// Label indicator outside {0, 1}.
    InvalidLabel { field: LabelField, value: i64 },
    /// Amount is non-finite, or negative under `AmountPolicy::Strict`.
    InvalidAmount { amount: f64 },
    /// Schedule rate is non-finite or negative.
    InvalidRate { param: &'static str, value: f64 },
}

impl fmt::Display for MarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginError::InvalidLabel { field, value } => write!(
                f,
                "invalid label: '{}' must be 0 or 1, got {}",
                field.as_str(),
                value
            ),
            MarginError::InvalidAmount { amount } => write!(
                f,
                "invalid amount: {amount} (must be finite and non-negative)"
            ),
            MarginError::InvalidRate { param, value } => write!(
                f,
                "invalid schedule: '{param}' is {value} (must be finite and non-negative)"
            ),
        }
    }
}

impl std::error::Error for MarginError {}

//! Margin scoring parameter defaults.
//!
//! Every scalar parameter of the margin schedule has a default, so a missing
//! value always resolves. An explicit value that is non-finite or negative
//! fails closed.

use std::fmt;

use margin_core::scoring::{BASE_RATE, REFUSED_COMMISSION_FACTOR};

/// Scalar parameters of the margin schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    BaseRate,
    RefusedCommissionFactor,
}

/// Error when an explicit parameter value is unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValueError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConfigValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' is unusable ({})",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for ConfigValueError {}

/// Returns the default for a parameter. Every parameter has one.
pub fn param_default(param: ConfigParam) -> f64 {
    match param {
        ConfigParam::BaseRate => BASE_RATE,
        ConfigParam::RefusedCommissionFactor => REFUSED_COMMISSION_FACTOR,
    }
}

/// Returns the snake_case name for a parameter (matches the JSON keys).
pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::BaseRate => "base_rate",
        ConfigParam::RefusedCommissionFactor => "refused_commission_factor",
    }
}

/// Expected number of ConfigParam variants. Update when adding new variants.
pub const EXPECTED_PARAM_COUNT: usize = 2;

/// All known `ConfigParam` variants (for exhaustive iteration in tests).
pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::BaseRate,
    ConfigParam::RefusedCommissionFactor,
];

/// Resolve a configuration value.
///
/// - `Some(v)` with `v` finite and non-negative → `v`.
/// - `Some(v)` otherwise → `Err` (fail-closed).
/// - `None` → the parameter default.
pub fn resolve_config_value(
    param: ConfigParam,
    value: Option<f64>,
) -> Result<f64, ConfigValueError> {
    if let Some(v) = value {
        if !v.is_finite() {
            return Err(ConfigValueError {
                param_name: param_name(param),
                reason: "value is non-finite (NaN or Infinity); fail-closed",
            });
        }
        if v < 0.0 {
            return Err(ConfigValueError {
                param_name: param_name(param),
                reason: "value is negative; all config params must be non-negative",
            });
        }
        return Ok(v);
    }
    let default = param_default(param);
    tracing::debug!(
        "ConfigDefaultApplied param={} value={}",
        param_name(param),
        default
    );
    Ok(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defaults_pass_explicit_value_checks() {
        for &param in ALL_PARAMS {
            let default = param_default(param);
            assert_eq!(
                resolve_config_value(param, Some(default)),
                Ok(default),
                "ConfigParam::{:?} ({}) default would be rejected if set explicitly",
                param,
                param_name(param),
            );
        }
    }

    #[test]
    fn all_params_listed_in_constant() {
        assert_eq!(
            ALL_PARAMS.len(),
            EXPECTED_PARAM_COUNT,
            "ALL_PARAMS length ({}) != EXPECTED_PARAM_COUNT ({}). \
             Did you add a ConfigParam variant without updating ALL_PARAMS?",
            ALL_PARAMS.len(),
            EXPECTED_PARAM_COUNT,
        );
        let mut names: Vec<&str> = ALL_PARAMS.iter().map(|&p| param_name(p)).collect();
        names.sort();
        names.dedup();
        assert_eq!(
            names.len(),
            ALL_PARAMS.len(),
            "ALL_PARAMS has duplicate entries"
        );
    }
}

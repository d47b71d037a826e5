//! JSON configuration document for a margin schedule.
//!
//! Example:
//!
//! ```json
//! {
//!   "base_rate": 0.05,
//!   "refused_commission_factor": 0.7,
//!   "amount_policy": "strict",
//!   "fraud_loss_tiers": [
//!     { "upper_bound": 20, "rate": 0.0 },
//!     { "upper_bound": null, "rate": 0.8 }
//!   ]
//! }
//! ```
//!
//! Every key is optional; omitted keys take the standard schedule's values.
//! The caller supplies the document text; nothing here touches the filesystem.

use std::fmt;

use margin_core::{AmountPolicy, MarginSchedule, RateTable, RateTableError, RateTier};
use serde::Deserialize;

use crate::config::{ConfigParam, ConfigValueError, resolve_config_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicyConfig {
    Strict,
    Passthrough,
}

impl From<AmountPolicyConfig> for AmountPolicy {
    fn from(value: AmountPolicyConfig) -> Self {
        match value {
            AmountPolicyConfig::Strict => AmountPolicy::Strict,
            AmountPolicyConfig::Passthrough => AmountPolicy::Passthrough,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    #[serde(default)]
    pub upper_bound: Option<f64>,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarginConfig {
    #[serde(default)]
    pub base_rate: Option<f64>,
    #[serde(default)]
    pub refused_commission_factor: Option<f64>,
    #[serde(default)]
    pub amount_policy: Option<AmountPolicyConfig>,
    #[serde(default)]
    pub fraud_loss_tiers: Option<Vec<TierConfig>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Param(ConfigValueError),
    RateTable(RateTableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "failed to parse margin config: {msg}"),
            ConfigError::Param(err) => write!(f, "{err}"),
            ConfigError::RateTable(err) => write!(f, "invalid fraud_loss_tiers: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(_) => None,
            ConfigError::Param(err) => Some(err),
            ConfigError::RateTable(err) => Some(err),
        }
    }
}

impl From<ConfigValueError> for ConfigError {
    fn from(err: ConfigValueError) -> Self {
        ConfigError::Param(err)
    }
}

impl From<RateTableError> for ConfigError {
    fn from(err: RateTableError) -> Self {
        ConfigError::RateTable(err)
    }
}

impl MarginConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve defaults and validate into a ready-to-use schedule.
    pub fn into_schedule(self) -> Result<MarginSchedule, ConfigError> {
        let base_rate = resolve_config_value(ConfigParam::BaseRate, self.base_rate)?;
        let refused_commission_factor = resolve_config_value(
            ConfigParam::RefusedCommissionFactor,
            self.refused_commission_factor,
        )?;

        let fraud_loss = match self.fraud_loss_tiers {
            Some(tiers) => RateTable::new(
                tiers
                    .into_iter()
                    .map(|t| RateTier {
                        upper_bound: t.upper_bound,
                        rate: t.rate,
                    })
                    .collect(),
            )?,
            None => RateTable::standard_fraud_loss(),
        };

        let amount_policy = self
            .amount_policy
            .map(AmountPolicy::from)
            .unwrap_or_default();

        tracing::debug!(
            "MarginScheduleLoaded base_rate={} refused_commission_factor={} tiers={} amount_policy={:?}",
            base_rate,
            refused_commission_factor,
            fraud_loss.tiers().len(),
            amount_policy
        );

        Ok(MarginSchedule {
            base_rate,
            refused_commission_factor,
            fraud_loss,
            amount_policy,
        })
    }
}

/// Parse a JSON document and build the schedule it describes.
pub fn load_schedule_from_json(raw: &str) -> Result<MarginSchedule, ConfigError> {
    MarginConfig::from_json_str(raw)?.into_schedule()
}

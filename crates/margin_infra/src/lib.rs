#![forbid(unsafe_code)]

pub mod config;
pub mod schedule_config;

pub use schedule_config::{
    AmountPolicyConfig, ConfigError, MarginConfig, TierConfig, load_schedule_from_json,
};

//! Confusion-matrix margin scoring for card transactions.

pub mod error;
pub mod label;
pub mod rate_table;
pub mod schedule;

pub use error::MarginError;
pub use label::{Label, LabelField, Outcome};
pub use rate_table::{RateTable, RateTableError, RateTier};
pub use schedule::{
    AmountPolicy, BASE_RATE, MarginSchedule, REFUSED_COMMISSION_FACTOR, default_schedule,
    evaluate_margin, evaluate_margin_indicators,
};

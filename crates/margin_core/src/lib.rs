#![forbid(unsafe_code)]

pub mod scoring;

pub use scoring::{
    AmountPolicy, BASE_RATE, Label, LabelField, MarginError, MarginSchedule, Outcome,
    REFUSED_COMMISSION_FACTOR, RateTable, RateTableError, RateTier, default_schedule,
    evaluate_margin, evaluate_margin_indicators,
};

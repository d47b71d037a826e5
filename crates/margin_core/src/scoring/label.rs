//! Binary fraud labels and the confusion-matrix outcome they form.
//!
//! Indicator encoding: 0 = legitimate, 1 = fraudulent. Any other value is a
//! domain violation and is rejected at construction time.

use super::error::MarginError;

/// Which input a label value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Predicted,
    True,
}

impl LabelField {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelField::Predicted => "predicted_label",
            LabelField::True => "true_label",
        }
    }
}

/// Transaction class, either as predicted by the model or as observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Legitimate,
    Fraudulent,
}

impl Label {
    /// Parse a raw 0/1 indicator.
    pub fn from_indicator(field: LabelField, value: i64) -> Result<Self, MarginError> {
        match value {
            0 => Ok(Label::Legitimate),
            1 => Ok(Label::Fraudulent),
            _ => Err(MarginError::InvalidLabel { field, value }),
        }
    }

    pub fn indicator(self) -> u8 {
        match self {
            Label::Legitimate => 0,
            Label::Fraudulent => 1,
        }
    }
}

/// Confusion-matrix quadrant for a (predicted, actual) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Legitimate transaction accepted.
    TrueNegative,
    /// Fraudulent transaction accepted.
    FalseNegative,
    /// Legitimate transaction refused.
    FalsePositive,
    /// Fraudulent transaction refused.
    TruePositive,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::TrueNegative,
        Outcome::FalseNegative,
        Outcome::FalsePositive,
        Outcome::TruePositive,
    ];

    pub fn classify(predicted: Label, actual: Label) -> Self {
        match (predicted, actual) {
            (Label::Legitimate, Label::Legitimate) => Outcome::TrueNegative,
            (Label::Legitimate, Label::Fraudulent) => Outcome::FalseNegative,
            (Label::Fraudulent, Label::Legitimate) => Outcome::FalsePositive,
            (Label::Fraudulent, Label::Fraudulent) => Outcome::TruePositive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::TrueNegative => "TN",
            Outcome::FalseNegative => "FN",
            Outcome::FalsePositive => "FP",
            Outcome::TruePositive => "TP",
        }
    }
}

//! Feature transform: one raw transaction → the fixed 14-slot model input.

mod derived;
mod encoding;
mod pipeline;
mod record;
pub mod rules;

pub use derived::{amount_log, is_cross_border, is_night, is_web, AgeBucket};
pub use encoding::{encode, CategoricalField, Encoding};
pub use pipeline::{transform, transform_with_report, EncodingReport};
pub use record::TransactionRecord;

use serde::Serialize;

pub const FEATURE_COUNT: usize = 14;

/// Column order the model was trained with. The model reads its input
/// positionally, so this order is part of the artifact contract.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "amount_log",
    "is_night",
    "is_cross_border",
    "is_web",
    "transaction_type_purchase",
    "transaction_type_transfer",
    "merchant_category_grocery",
    "merchant_category_telecom",
    "merchant_category_travel",
    "merchant_category_unknown",
    "card_type_debit",
    "age_bucket_31-45",
    "age_bucket_46-60",
    "age_bucket_60+",
];

pub(crate) const AMOUNT_LOG: usize = 0;
pub(crate) const IS_NIGHT: usize = 1;
pub(crate) const IS_CROSS_BORDER: usize = 2;
pub(crate) const IS_WEB: usize = 3;

/// Fixed-size feature vector, ordered as [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn zeros() -> Self {
        Self::from_values([0.0; FEATURE_COUNT])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Value of the slot named `name`, if it is part of the vocabulary.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Single-precision copy for runtimes that take `f32` input.
    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.values.map(|v| v as f32)
    }

    pub(crate) fn set(&mut self, slot: usize, value: f64) {
        self.values[slot] = value;
    }
}

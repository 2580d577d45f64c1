//! One-hot encoding restricted to the model's trained vocabulary.
//!
//! Each categorical field only has indicator slots for the values the model was
//! trained with. Any other value is the field's baseline: all of its indicators
//! stay 0. That branch is returned explicitly so callers can see it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    TransactionType,
    MerchantCategory,
    CardType,
    AgeBucket,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 4] = [
        CategoricalField::TransactionType,
        CategoricalField::MerchantCategory,
        CategoricalField::CardType,
        CategoricalField::AgeBucket,
    ];

    /// Column prefix used when the field is expanded into indicators.
    pub fn prefix(self) -> &'static str {
        match self {
            CategoricalField::TransactionType => "transaction_type",
            CategoricalField::MerchantCategory => "merchant_category",
            CategoricalField::CardType => "card_type",
            CategoricalField::AgeBucket => "age_bucket",
        }
    }

    /// Retained values and the feature slot each one sets.
    pub fn vocabulary(self) -> &'static [(&'static str, usize)] {
        match self {
            CategoricalField::TransactionType => &[("purchase", 4), ("transfer", 5)],
            CategoricalField::MerchantCategory => &[
                ("grocery", 6),
                ("telecom", 7),
                ("travel", 8),
                ("unknown", 9),
            ],
            CategoricalField::CardType => &[("debit", 10)],
            CategoricalField::AgeBucket => &[("31-45", 11), ("46-60", 12), ("60+", 13)],
        }
    }
}

/// Outcome of encoding one categorical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// The value is in the vocabulary; set this slot to 1.
    Indicator(usize),
    /// Unknown, absent, or the dropped reference value: no indicator set.
    Baseline,
}

/// Encode `value` for `field`. `None` (e.g. an age with no bucket) is baseline.
pub fn encode(field: CategoricalField, value: Option<&str>) -> Encoding {
    let Some(value) = value else {
        return Encoding::Baseline;
    };
    field
        .vocabulary()
        .iter()
        .find(|(v, _)| *v == value)
        .map(|&(_, slot)| Encoding::Indicator(slot))
        .unwrap_or(Encoding::Baseline)
}

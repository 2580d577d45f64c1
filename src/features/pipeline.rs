//! Transform pipeline: record → derived features → restricted one-hot → vector.

use super::derived::{amount_log, is_cross_border, is_night, is_web, AgeBucket};
use super::encoding::{encode, CategoricalField, Encoding};
use super::{FeatureVector, TransactionRecord, AMOUNT_LOG, IS_CROSS_BORDER, IS_NIGHT, IS_WEB};

/// Categorical fields that fell to their baseline encoding for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingReport {
    pub baseline_fields: Vec<CategoricalField>,
}

impl EncodingReport {
    pub fn is_baseline(&self, field: CategoricalField) -> bool {
        self.baseline_fields.contains(&field)
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Build the model input for one transaction. Never fails: unknown or
/// out-of-range values degrade to zeroed indicators.
pub fn transform(record: &TransactionRecord) -> FeatureVector {
    transform_with_report(record).0
}

/// Same as [`transform`], also reporting which categorical fields set no indicator.
pub fn transform_with_report(record: &TransactionRecord) -> (FeatureVector, EncodingReport) {
    let mut v = FeatureVector::zeros();
    v.set(AMOUNT_LOG, amount_log(record.amount));
    v.set(IS_NIGHT, flag(is_night(record.hour)));
    v.set(IS_CROSS_BORDER, flag(is_cross_border(&record.country)));
    v.set(IS_WEB, flag(is_web(&record.device)));

    let bucket = AgeBucket::from_age(record.customer_age);
    let categorical = [
        (CategoricalField::TransactionType, Some(record.transaction_type.as_str())),
        (CategoricalField::MerchantCategory, Some(record.merchant_category.as_str())),
        (CategoricalField::CardType, Some(record.card_type.as_str())),
        (CategoricalField::AgeBucket, bucket.map(AgeBucket::label)),
    ];

    let mut report = EncodingReport::default();
    for (field, value) in categorical {
        match encode(field, value) {
            Encoding::Indicator(slot) => v.set(slot, 1.0),
            Encoding::Baseline => report.baseline_fields.push(field),
        }
    }
    (v, report)
}

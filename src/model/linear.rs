//! Logistic-regression artifact stored as JSON coefficients.
//!
//! Format: `{"feature_names": [...], "coefficients": [...], "intercept": f64}`.
//! `feature_names` must list the vocabulary in order; anything else was trained
//! on different columns and is refused at load time.

use super::{checked_probability, ModelError, ScoringModel};
use crate::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogisticArtifact {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ModelError> {
        let artifact: LogisticArtifact = serde_json::from_str(data)?;
        if artifact.feature_names != FEATURE_NAMES {
            return Err(ModelError::Incompatible(format!(
                "feature_names {:?} do not match the serving vocabulary",
                artifact.feature_names
            )));
        }
        let coefficients: [f64; FEATURE_COUNT] =
            artifact.coefficients.as_slice().try_into().map_err(|_| {
                ModelError::Incompatible(format!(
                    "expected {} coefficients, found {}",
                    FEATURE_COUNT,
                    artifact.coefficients.len()
                ))
            })?;
        Ok(Self::new(coefficients, artifact.intercept))
    }

    fn logit(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_slice())
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl ScoringModel for LogisticModel {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        checked_probability(sigmoid(self.logit(features)))
    }

    fn describe(&self) -> String {
        format!("logistic({} features)", FEATURE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(names: &[&str], coefficients: &[f64]) -> String {
        serde_json::json!({
            "feature_names": names,
            "coefficients": coefficients,
            "intercept": -2.0,
        })
        .to_string()
    }

    #[test]
    fn zero_logit_is_one_half() {
        let m = LogisticModel::new([0.0; FEATURE_COUNT], 0.0);
        assert_eq!(m.predict_proba(&FeatureVector::zeros()).unwrap(), 0.5);
    }

    #[test]
    fn applies_weights_positionally() {
        let mut w = [0.0; FEATURE_COUNT];
        w[1] = 2.0; // is_night
        let m = LogisticModel::new(w, -2.0);
        let mut values = [0.0; FEATURE_COUNT];
        values[1] = 1.0;
        let p = m.predict_proba(&FeatureVector::from_values(values)).unwrap();
        assert_eq!(p, 0.5);
        let p0 = m.predict_proba(&FeatureVector::zeros()).unwrap();
        assert!((p0 - sigmoid(-2.0)).abs() < 1e-15);
    }

    #[test]
    fn extreme_logits_stay_in_range() {
        let m = LogisticModel::new([0.0; FEATURE_COUNT], -1000.0);
        assert_eq!(m.predict_proba(&FeatureVector::zeros()).unwrap(), 0.0);
        let m = LogisticModel::new([0.0; FEATURE_COUNT], 1000.0);
        assert_eq!(m.predict_proba(&FeatureVector::zeros()).unwrap(), 1.0);
    }

    #[test]
    fn parses_matching_artifact() {
        let m = LogisticModel::from_json(&artifact(&FEATURE_NAMES, &[0.5; 14])).unwrap();
        assert_eq!(m.intercept, -2.0);
        assert_eq!(m.coefficients, [0.5; 14]);
    }

    #[test]
    fn rejects_reordered_vocabulary() {
        let mut names = FEATURE_NAMES;
        names.swap(0, 1);
        let err = LogisticModel::from_json(&artifact(&names, &[0.5; 14])).unwrap_err();
        assert!(matches!(err, ModelError::Incompatible(_)));
    }

    #[test]
    fn rejects_wrong_coefficient_count() {
        let err = LogisticModel::from_json(&artifact(&FEATURE_NAMES, &[0.5; 13])).unwrap_err();
        assert!(matches!(err, ModelError::Incompatible(_)));
    }
}

//! Turns a model probability into the reported score: rounded probability,
//! thresholded decision and risk band.

use crate::config::ScoringConfig;
use crate::features::FeatureVector;
use crate::model::{ModelError, ScoringModel};
use serde::{Deserialize, Serialize};

/// Probability cut points for the risk bands. Fixed, and independent of the
/// decision threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBands {
    pub medium: f64,
    pub high: f64,
}

impl RiskBands {
    pub const FIXED: RiskBands = RiskBands {
        medium: 0.35,
        high: 0.7,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_probability(prob: f64) -> Self {
        let bands = RiskBands::FIXED;
        if prob >= bands.high {
            RiskLevel::High
        } else if prob >= bands.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Score for a single transaction, as returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub fraud_probability: f64,
    pub is_fraud: u8,
    pub risk_level: RiskLevel,
}

/// Round to 4 decimals on the exact decimal value of `p`. Scaling by 10^4
/// first can turn a value just below a tie into an exact tie.
fn round4(p: f64) -> f64 {
    format!("{p:.4}").parse().unwrap_or(p)
}

/// Decide on an already computed probability. The decision and the band use
/// the unrounded value; only the reported probability is rounded.
pub fn decide(prob: f64, threshold: f64) -> ScoreResult {
    ScoreResult {
        fraud_probability: round4(prob),
        is_fraud: u8::from(prob >= threshold),
        risk_level: RiskLevel::from_probability(prob),
    }
}

/// Run `model` on `vector` and decide against `threshold`.
pub fn score(
    vector: &FeatureVector,
    model: &dyn ScoringModel,
    threshold: f64,
) -> Result<ScoreResult, ModelError> {
    let prob = model.predict_proba(vector)?;
    Ok(decide(prob, threshold))
}

/// Scoring wrapper bound to a deployment's decision threshold.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        vector: &FeatureVector,
        model: &dyn ScoringModel,
    ) -> Result<ScoreResult, ModelError> {
        score(vector, model, self.config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }
}

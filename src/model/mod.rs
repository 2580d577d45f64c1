//! Scoring models. The service only needs one capability from a model: given the
//! ordered feature vector, return the probability that the transaction is fraud.

mod linear;
mod onnx;

pub use linear::LogisticModel;
pub use onnx::OnnxClassifier;

use crate::features::FeatureVector;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("unsupported model artifact format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("model artifact checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
    #[error("incompatible model artifact: {0}")]
    Incompatible(String),
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("onnx runtime: {0}")]
    Onnx(String),
    #[error("model returned invalid probability {0}")]
    InvalidProbability(f64),
}

/// Anything that can turn a feature vector into P(fraud).
///
/// Implementations are loaded once and shared read-only between requests.
pub trait ScoringModel: Send + Sync {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Short description for logs and the health endpoint.
    fn describe(&self) -> String;
}

/// Hex SHA-256 of the file at `path`.
pub fn artifact_digest(path: &Path) -> Result<String, ModelError> {
    let bytes = std::fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

/// Load the artifact at `path`, picking the backend from the file extension.
/// When `expected_sha256` is set the file must hash to it.
pub fn load_model(
    path: &Path,
    expected_sha256: Option<&str>,
) -> Result<Arc<dyn ScoringModel>, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }
    if let Some(expected) = expected_sha256 {
        let actual = artifact_digest(path)?;
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            return Err(ModelError::ChecksumMismatch {
                expected: expected.to_string(),
                actual,
            });
        }
    }

    let model: Arc<dyn ScoringModel> = match path.extension().and_then(|e| e.to_str()) {
        Some("onnx") => Arc::new(OnnxClassifier::load(path)?),
        Some("json") => Arc::new(LogisticModel::load(path)?),
        _ => return Err(ModelError::UnsupportedFormat(path.to_path_buf())),
    };
    info!(path = %path.display(), model = %model.describe(), "model loaded");
    Ok(model)
}

/// Reject probabilities a classifier cannot legitimately produce.
pub(crate) fn checked_probability(p: f64) -> Result<f64, ModelError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(ModelError::InvalidProbability(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_NAMES;
    use std::io::Write;

    fn write_logistic(dir: &Path) -> PathBuf {
        let path = dir.join("model.json");
        let coefficients = [0.0f64; 14];
        let body = serde_json::json!({
            "feature_names": FEATURE_NAMES,
            "coefficients": coefficients,
            "intercept": 0.0,
        });
        std::fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let err = load_model(Path::new("does-not-exist.onnx"), None).err().unwrap();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let mut f = tempfile::Builder::new().suffix(".pkl").tempfile().unwrap();
        f.write_all(b"not a model").unwrap();
        let err = load_model(f.path(), None).err().unwrap();
        assert!(matches!(err, ModelError::UnsupportedFormat(_)));
    }

    #[test]
    fn checksum_must_match() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_logistic(dir.path());
        let digest = artifact_digest(&path).unwrap();
        assert_eq!(digest.len(), 64);

        assert!(load_model(&path, Some(digest.to_uppercase().as_str())).is_ok());
        let err = load_model(&path, Some("00ff")).err().unwrap();
        assert!(matches!(err, ModelError::ChecksumMismatch { .. }));
    }

    #[test]
    fn probability_bounds() {
        assert_eq!(checked_probability(0.0).unwrap(), 0.0);
        assert_eq!(checked_probability(1.0).unwrap(), 1.0);
        assert!(checked_probability(1.01).is_err());
        assert!(checked_probability(-0.1).is_err());
        assert!(checked_probability(f64::NAN).is_err());
    }
}

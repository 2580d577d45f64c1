//! ONNX Runtime inference for a binary classifier. Input: [1, 14] f32.
//! Output: a probability tensor, either `[1, 2]` (class 1 = fraud) or a single
//! fraud probability. The runtime library is loaded dynamically at first use.

use super::{checked_probability, ModelError, ScoringModel};
use crate::features::{FeatureVector, FEATURE_COUNT};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

fn onnx_err(e: impl std::fmt::Display) -> ModelError {
    ModelError::Onnx(e.to_string())
}

pub struct OnnxClassifier {
    // A session needs exclusive access while running.
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    path: PathBuf,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(onnx_err)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(onnx_err)?
            .with_intra_threads(1)
            .map_err(onnx_err)?
            .commit_from_file(path)
            .map_err(onnx_err)?;

        if session.inputs.len() != 1 {
            return Err(ModelError::Incompatible(format!(
                "expected one input tensor, model declares {}",
                session.inputs.len()
            )));
        }
        let input_name = session.inputs[0].name.clone();

        // Classifiers usually emit (label, probabilities); prefer the latter.
        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("prob"))
            .or_else(|| session.outputs.last())
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Incompatible("model declares no outputs".into()))?;

        debug!(input = %input_name, output = %output_name, "onnx session ready");

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            path: path.to_path_buf(),
        })
    }

    fn fraud_probability(data: &[f32]) -> Result<f64, ModelError> {
        let p = match data {
            [p] => *p,
            [_, fraud] => *fraud,
            _ => {
                return Err(ModelError::Incompatible(format!(
                    "expected 1 or 2 output values, got {}",
                    data.len()
                )))
            }
        };
        checked_probability(f64::from(p))
    }
}

impl ScoringModel for OnnxClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let arr = Array2::from_shape_vec((1, FEATURE_COUNT), features.to_f32().to_vec())
            .map_err(|e| ModelError::Incompatible(e.to_string()))?;
        let input = Tensor::from_array(arr).map_err(onnx_err)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ModelError::Onnx("session lock poisoned".into()))?;
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(onnx_err)?;
        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| ModelError::Onnx(format!("missing output {}", self.output_name)))?;
        let (_, data) = output.try_extract_tensor::<f32>().map_err(onnx_err)?;
        Self::fraud_probability(data)
    }

    fn describe(&self) -> String {
        format!("onnx({})", self.path.display())
    }
}

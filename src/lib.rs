//! Fraud scorer — online fraud scoring for single transactions.
//!
//! Modular structure:
//! - [`features`] — Transaction → fixed 14-slot feature vector
//! - [`model`] — Scoring model capability (ONNX, logistic regression)
//! - [`risk`] — Probability → decision and risk level
//! - [`server`] — HTTP routes
//! - [`logging`] — Structured logging setup

pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod risk;
pub mod server;

pub use config::ServiceConfig;
pub use features::{transform, FeatureVector, TransactionRecord};
pub use logging::StructuredLogger;
pub use model::{load_model, ModelError, ScoringModel};
pub use risk::{score, RiskLevel, ScoreResult, Scorer};

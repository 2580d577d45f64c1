//! Scoring wrapper: model probability → decision and risk level.

mod engine;

pub use engine::{decide, score, RiskBands, RiskLevel, ScoreResult, Scorer};

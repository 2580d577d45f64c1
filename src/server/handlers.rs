//! Route handlers.

use super::error::ApiResult;
use super::AppState;
use crate::features::{transform_with_report, TransactionRecord};
use crate::risk::ScoreResult;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, info_span};
use uuid::Uuid;

pub async fn root() -> Json<Value> {
    Json(json!({ "status": "Fraud Detection API running" }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model: String,
    threshold: f64,
    timestamp: i64,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model: state.model.describe(),
        threshold: state.scorer.threshold(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<TransactionRecord>, JsonRejection>,
) -> ApiResult<Json<ScoreResult>> {
    let Json(record) = payload?;
    let request_id = Uuid::new_v4();
    let span = info_span!("predict", %request_id);

    let vector = span.in_scope(|| {
        let (vector, report) = transform_with_report(&record);
        if !report.baseline_fields.is_empty() {
            debug!(baseline_fields = ?report.baseline_fields, "categorical fields at baseline");
        }
        vector
    });

    // Inference may block on the model session; keep it off the async workers.
    let (model, scorer, scoring_span) = (state.model.clone(), state.scorer.clone(), span.clone());
    let result = tokio::task::spawn_blocking(move || {
        scoring_span.in_scope(|| scorer.score(&vector, model.as_ref()))
    })
    .await??;

    span.in_scope(|| {
        info!(
            fraud_probability = result.fraud_probability,
            is_fraud = result.is_fraud,
            risk_level = result.risk_level.as_str(),
            "transaction scored"
        )
    });
    Ok(Json(result))
}

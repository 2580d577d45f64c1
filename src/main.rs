//! Fraud scorer entrypoint: load config and model once, then serve `/predict`.
//! A missing or incompatible model artifact stops startup.

use anyhow::Context;
use fraud_scorer::{
    config::ServiceConfig,
    logging::StructuredLogger,
    model::load_model,
    risk::Scorer,
    server::{self, AppState},
};
use tracing::info;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServiceConfig::from_env().context("loading configuration")?;

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(
        model_path = %config.model_path.display(),
        threshold = config.scoring.threshold,
        "fraud scorer starting"
    );

    let model = load_model(&config.model_path, config.model_sha256.as_deref())
        .with_context(|| format!("loading model {}", config.model_path.display()))?;
    let state = AppState::new(model, Scorer::new(config.scoring.clone()));
    let app = server::router(state, &config.server);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("fraud scorer stopped");
    Ok(())
}

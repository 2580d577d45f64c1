//! Service configuration: JSON file, then environment overrides.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "FRAUD_SCORER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Path to the model artifact (`.onnx` or `.json`)
    pub model_path: PathBuf,
    /// Expected hex SHA-256 of the artifact; checked at load when set
    pub model_sha256: Option<String>,
    pub scoring: ScoringConfig,
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Probability at or above which a transaction is flagged (0.0–1.0)
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("fraud_model.onnx"),
            model_sha256: None,
            scoring: ScoringConfig::default(),
            server: ServerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { threshold: 0.35 }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            allowed_origins: [
                "http://localhost:3000",
                "http://localhost:3001",
                "http://localhost:5173",
                "http://127.0.0.1:3000",
                "http://127.0.0.1:5173",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ServiceConfig {
    /// Load from JSON file if present; otherwise defaults. A file that exists
    /// but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the file named by `FRAUD_SCORER_CONFIG` (default `config.json`),
    /// apply environment overrides and validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::load_configured(std::env::var(CONFIG_PATH_ENV).ok())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicitly named file, or the optional `config.json` when none
    /// is named. Only the implicit default may be absent.
    pub fn load_configured(explicit: Option<String>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::Read {
                        source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                        path,
                    });
                }
                Self::load(&path)
            }
            None => Self::load(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Override fields from `lookup` (the process environment in production).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = lookup("FRAUD_SCORER_MODEL_PATH") {
            self.model_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("FRAUD_SCORER_MODEL_SHA256") {
            self.model_sha256 = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = lookup("FRAUD_SCORER_THRESHOLD") {
            self.scoring.threshold = v.parse().map_err(|_| ConfigError::Invalid {
                key: "FRAUD_SCORER_THRESHOLD",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("FRAUD_SCORER_BIND") {
            self.server.bind = v;
        }
        if let Some(v) = lookup("FRAUD_SCORER_LOG_JSON") {
            self.log.json = v.parse().map_err(|_| ConfigError::Invalid {
                key: "FRAUD_SCORER_LOG_JSON",
                value: v.clone(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.scoring.threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::Invalid {
                key: "scoring.threshold",
                value: t.to_string(),
            });
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|_| ConfigError::Invalid {
            key: "server.bind",
            value: self.server.bind.clone(),
        })
    }
}

use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const SERVICE_NAME: &str = "predictor-service";

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub common: core_config::Config,
    pub observability: ObservabilityConfig,
    /// When set, files under this directory are served for paths no route matches.
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// When set, traces are exported over OTLP.
    pub otlp_endpoint: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

impl PredictorConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(PredictorConfig {
            common,
            observability: ObservabilityConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: non_empty_env("OTLP_ENDPOINT"),
            },
            static_dir: non_empty_env("STATIC_DIR").map(PathBuf::from),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

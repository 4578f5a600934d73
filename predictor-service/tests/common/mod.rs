//! Test helper module for predictor-service integration tests.

#![allow(dead_code)]

use predictor_service::config::{ObservabilityConfig, PredictorConfig};
use predictor_service::startup::Application;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::path::PathBuf;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub fn test_config(static_dir: Option<PathBuf>) -> PredictorConfig {
    PredictorConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        observability: ObservabilityConfig::default(),
        static_dir,
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    server: JoinHandle<Result<(), AppError>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config(None)).await
    }

    pub async fn spawn_with(config: PredictorConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        // Dropping the sender also triggers shutdown.
        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(app.run_with_shutdown(async move {
            rx.await.ok();
        }));

        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
            shutdown: Some(tx),
            server,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Signal shutdown and wait for the server task to finish.
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
        (&mut self.server)
            .await
            .expect("Server task panicked")
    }
}

use axum::{middleware::from_fn, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use service_core::error::AppError;
use service_core::metrics::init_metrics;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::PredictorConfig;
use crate::handlers::{health_check, metrics_endpoint, predictor};

const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone, Default)]
pub struct AppState {
    pub metrics: Option<PrometheusHandle>,
    pub static_dir: Option<PathBuf>,
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/predictor", get(predictor))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint));

    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    metrics: PrometheusHandle,
}

impl Application {
    /// Build the application and bind its listener. Port 0 picks an ephemeral port.
    pub async fn build(config: PredictorConfig) -> Result<Self, AppError> {
        let metrics = init_metrics().map_err(|e| {
            tracing::error!("Failed to install metrics recorder: {}", e);
            AppError::Internal(anyhow::anyhow!("Metrics recorder error: {}", e))
        })?;

        if let Some(dir) = &config.static_dir {
            tracing::info!("Serving static assets from {}", dir.display());
        }

        let router = build_router(AppState {
            metrics: Some(metrics.clone()),
            static_dir: config.static_dir.clone(),
        });

        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::Bind {
                address: address.clone(),
                source: e,
            }
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Predictor service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
            metrics,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until SIGINT or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    /// Run until `signal` resolves, then drain in-flight requests and return.
    pub async fn run_with_shutdown<F>(self, signal: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let metrics = self.metrics.clone();
        let upkeep = tokio::spawn(async move {
            let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
            loop {
                interval.tick().await;
                metrics.run_upkeep();
            }
        });

        let result = axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await;

        upkeep.abort();

        result.map_err(|e| {
            tracing::error!("HTTP server error: {}", e);
            AppError::from(e)
        })?;

        tracing::info!("Service shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

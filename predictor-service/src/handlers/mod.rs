//! HTTP handlers for predictor-service.

pub mod health;
pub mod metrics;
pub mod predictor;

pub use health::health_check;
pub use metrics::metrics_endpoint;
pub use predictor::predictor;

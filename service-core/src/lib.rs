//! service-core: Shared infrastructure for the predictor microservices.
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod observability;

pub use axum;
pub use tracing;

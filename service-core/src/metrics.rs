//! Process-wide Prometheus recorder.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder on first call; later calls return the same handle.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    METRICS_HANDLE
        .get_or_try_init(|| PrometheusBuilder::new().install_recorder())
        .cloned()
}

use employee_roster::roster::MinimumFloorPolicy;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_policy(raw: &str) -> Result<MinimumFloorPolicy, String> {
    MinimumFloorPolicy::parse(raw).ok_or_else(|| {
        format!("unknown minimum floor policy '{raw}' (expected auto-lower or strict)")
    })
}

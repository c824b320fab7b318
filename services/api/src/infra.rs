use hr_pipeline::config::PipelineSettings;
use hr_pipeline::workflows::recruitment::{InMemoryEmployeeRepository, RecruitmentService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fresh service over the seed set; nothing survives a restart.
pub(crate) fn seeded_service(
    settings: PipelineSettings,
) -> RecruitmentService<InMemoryEmployeeRepository> {
    let repository = Arc::new(InMemoryEmployeeRepository::seeded());
    RecruitmentService::new(repository, settings)
}

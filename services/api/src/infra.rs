use candidate_sourcing::config::AppConfig;
use candidate_sourcing::error::AppError;
use candidate_sourcing::workflows::sourcing::{
    check_as_of_year, ConfiguredCandidateSource, RandomMatchScorer, SourcingService,
    VisaRequirement,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ConfiguredSourcingService =
    SourcingService<ConfiguredCandidateSource, RandomMatchScorer>;

/// Wire the configured candidate source and placeholder scorer into a service.
pub(crate) fn configured_sourcing_service(
    config: &AppConfig,
) -> Result<Arc<ConfiguredSourcingService>, AppError> {
    let source = ConfiguredCandidateSource::from_config(&config.provider)?;
    info!(
        live = config.provider.is_live(),
        min_score = config.scoring.min_score,
        max_score = config.scoring.max_score,
        "candidate source configured"
    );

    Ok(Arc::new(SourcingService::new(
        Arc::new(source),
        Arc::new(RandomMatchScorer::new(config.scoring)),
    )))
}

pub(crate) fn parse_requirement(raw: &str) -> Result<VisaRequirement, String> {
    raw.parse::<VisaRequirement>().map_err(|err| {
        format!("{err}; expected Any, Citizen/GC, OPT/STEM, H1B, Foreign/H1B or Unknown")
    })
}

pub(crate) fn parse_year(raw: &str) -> Result<i32, String> {
    let year = raw
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("failed to parse '{raw}' as a year ({err})"))?;
    check_as_of_year(year).map_err(|err| err.to_string())
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bench::{market_bench, BenchConsultant};
use super::classifier::check_as_of_year;
use super::domain::{JobPosting, RankedCandidate, VisaRequirement};
use super::ranking::MatchScorer;
use super::service::SourcingService;
use super::source::{CandidateSource, DataSource};

/// Sourcing request body. `as_of_year` pins the evaluation year; it defaults to the current one.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceCandidatesRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub visa_requirement: VisaRequirement,
    #[serde(default)]
    pub as_of_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceCandidatesResponse {
    pub job_title: String,
    pub visa_requirement: VisaRequirement,
    pub as_of_year: i32,
    pub data_source: DataSource,
    pub total_scanned: usize,
    pub verified_count: usize,
    pub hidden_count: usize,
    pub candidates: Vec<RankedCandidate>,
}

/// Router builder exposing the sourcing and bench-marketing endpoints.
pub fn sourcing_router<S, M>(service: Arc<SourcingService<S, M>>) -> Router
where
    S: CandidateSource + 'static,
    M: MatchScorer + 'static,
{
    Router::new()
        .route(
            "/automations/source-candidates",
            post(source_candidates_handler::<S, M>),
        )
        .route("/automations/market-bench", post(market_bench_handler))
        .with_state(service)
}

pub(crate) async fn source_candidates_handler<S, M>(
    State(service): State<Arc<SourcingService<S, M>>>,
    Json(request): Json<SourceCandidatesRequest>,
) -> Response
where
    S: CandidateSource + 'static,
    M: MatchScorer + 'static,
{
    let SourceCandidatesRequest {
        title,
        description,
        visa_requirement,
        as_of_year,
    } = request;

    let as_of_year = match as_of_year.map(check_as_of_year).transpose() {
        Ok(year) => year.unwrap_or_else(|| Local::now().year()),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };
    let posting = JobPosting {
        title,
        description,
        visa_requirement,
    };

    let report = service.source_candidates(&posting, as_of_year).await;
    let hidden_count = report.hidden_count();

    let body = SourceCandidatesResponse {
        job_title: report.job_title,
        visa_requirement: report.visa_requirement,
        as_of_year,
        data_source: report.data_source,
        total_scanned: report.total_scanned,
        verified_count: report.verified_count,
        hidden_count,
        candidates: report.candidates,
    };

    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn market_bench_handler(Json(consultant): Json<BenchConsultant>) -> Response {
    let pitch = market_bench(&consultant);
    (StatusCode::OK, Json(pitch)).into_response()
}

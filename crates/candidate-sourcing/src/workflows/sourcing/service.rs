use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::{JobPosting, RankedCandidate, VisaRequirement};
use super::ranking::{rank_and_filter, MatchScorer};
use super::skills::extract_skills;
use super::source::{CandidateSource, DataSource, StaticCandidateSource};

/// Outcome of one sourcing request.
#[derive(Debug, Clone, Serialize)]
pub struct SourcingReport {
    pub job_title: String,
    pub visa_requirement: VisaRequirement,
    pub skills: Vec<String>,
    pub data_source: DataSource,
    pub total_scanned: usize,
    pub verified_count: usize,
    pub candidates: Vec<RankedCandidate>,
}

impl SourcingReport {
    /// Candidates removed by the visa filter.
    pub fn hidden_count(&self) -> usize {
        self.total_scanned - self.verified_count
    }
}

/// Service composing a candidate source, the static fallback, and the scorer.
pub struct SourcingService<S, M> {
    source: Arc<S>,
    scorer: Arc<M>,
}

impl<S, M> SourcingService<S, M>
where
    S: CandidateSource + 'static,
    M: MatchScorer + 'static,
{
    pub fn new(source: Arc<S>, scorer: Arc<M>) -> Self {
        Self { source, scorer }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Run extraction, fetch, classification, filtering, and scoring for one posting.
    ///
    /// Provider failures are logged and answered from the static roster.
    pub async fn source_candidates(
        &self,
        posting: &JobPosting,
        as_of_year: i32,
    ) -> SourcingReport {
        let skills = extract_skills(&posting.description);

        let (candidates, data_source) = match self.source.fetch(&skills).await {
            Ok(candidates) => (candidates, self.source.data_source()),
            Err(err) => {
                warn!(error = %err, "candidate provider unavailable, serving static roster");
                (StaticCandidateSource::roster(), DataSource::Static)
            }
        };

        let total_scanned = candidates.len();
        let ranked = rank_and_filter(
            &candidates,
            posting.visa_requirement,
            &skills,
            as_of_year,
            self.scorer.as_ref(),
        );

        info!(
            job_title = %posting.title,
            requirement = %posting.visa_requirement,
            source = ?data_source,
            scanned = total_scanned,
            verified = ranked.len(),
            "sourcing request complete"
        );

        SourcingReport {
            job_title: posting.title.clone(),
            visa_requirement: posting.visa_requirement,
            skills: skills.into_iter().collect(),
            data_source,
            total_scanned,
            verified_count: ranked.len(),
            candidates: ranked,
        }
    }
}

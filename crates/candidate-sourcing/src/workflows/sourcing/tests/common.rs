use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::sourcing::domain::{Candidate, EducationRecord, JobPosting, VisaRequirement};
use crate::workflows::sourcing::ranking::FixedMatchScorer;
use crate::workflows::sourcing::service::SourcingService;
use crate::workflows::sourcing::source::{CandidateSource, DataSource, ProviderError};

pub(super) const AS_OF: i32 = 2024;

pub(super) fn candidate(name: &str, education: &[(&str, &str)]) -> Candidate {
    Candidate {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        skills: ["Java".to_string()].into_iter().collect(),
        education: education
            .iter()
            .map(|(country, end_date)| EducationRecord::from_reported(*country, Some(*end_date)))
            .collect(),
    }
}

pub(super) fn provider_roster() -> Vec<Candidate> {
    vec![
        candidate("Jordan Park", &[("United States", "2010-05")]),
        candidate("Lin Wei", &[("China", "2018"), ("United States", "2020")]),
        candidate("Omar Haddad", &[("Jordan", "2016")]),
    ]
}

pub(super) fn posting(requirement: VisaRequirement) -> JobPosting {
    JobPosting {
        title: "Senior Java Engineer".to_string(),
        description: "Java and Spring Boot on AWS".to_string(),
        visa_requirement: requirement,
    }
}

/// Provider double that records the skills it was queried with.
#[derive(Default)]
pub(super) struct RecordingSource {
    pub(super) calls: AtomicUsize,
    pub(super) last_skills: std::sync::Mutex<BTreeSet<String>>,
}

#[async_trait]
impl CandidateSource for RecordingSource {
    fn data_source(&self) -> DataSource {
        DataSource::Live
    }

    async fn fetch(&self, skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        *self.last_skills.lock().expect("skills mutex poisoned") = skills.clone();
        Ok(provider_roster())
    }
}

pub(super) struct UnavailableSource;

#[async_trait]
impl CandidateSource for UnavailableSource {
    fn data_source(&self) -> DataSource {
        DataSource::Live
    }

    async fn fetch(&self, _skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError> {
        Err(ProviderError::Status(503))
    }
}

pub(super) fn service_with<S: CandidateSource + 'static>(
    source: S,
) -> Arc<SourcingService<S, FixedMatchScorer>> {
    Arc::new(SourcingService::new(
        Arc::new(source),
        Arc::new(FixedMatchScorer(91)),
    ))
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

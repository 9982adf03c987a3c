use super::{CandidateSource, DataSource, ProviderError};
use crate::workflows::sourcing::domain::{Candidate, EducationRecord};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Fixed roster served when no provider credential is configured or the provider fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCandidateSource;

impl StaticCandidateSource {
    pub fn roster() -> Vec<Candidate> {
        vec![
            candidate(
                "Sarah Jones",
                "sarah.j@example.com",
                &["Java", "AWS"],
                &[("United States", "2012")],
            ),
            candidate(
                "Alex Chen",
                "alex.c@example.com",
                &["Java", "Spring Boot"],
                &[("China", "2018"), ("United States", "2020")],
            ),
            candidate(
                "Rahul V",
                "rahul.v@example.com",
                &["Java"],
                &[("India", "2022")],
            ),
            candidate(
                "Maria Lopez",
                "maria.l@example.com",
                &["Java", "AWS", "Kubernetes"],
                &[("Mexico", "2015"), ("United States", "2023-05")],
            ),
        ]
    }
}

#[async_trait]
impl CandidateSource for StaticCandidateSource {
    fn data_source(&self) -> DataSource {
        DataSource::Static
    }

    async fn fetch(&self, _skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError> {
        Ok(Self::roster())
    }
}

fn candidate(name: &str, email: &str, skills: &[&str], education: &[(&str, &str)]) -> Candidate {
    Candidate {
        name: name.to_string(),
        email: email.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        education: education
            .iter()
            .map(|(country, end_date)| EducationRecord::from_reported(*country, Some(*end_date)))
            .collect(),
    }
}

use super::{CandidateSource, DataSource, ProviderError};
use crate::workflows::sourcing::domain::{Candidate, EducationRecord};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Failure to import a CSV roster export.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster line {line} has no candidate name")]
    MissingName { line: u64 },
    #[error("roster line {line} has an education entry without a country: '{entry}'")]
    InvalidEducation { line: u64, entry: String },
}

/// Candidates loaded from a CSV roster export.
///
/// Columns: `Name,Email,Skills,Education`. Skills are `;`-separated; education entries are
/// `Country:EndDate` joined by `|`, in the order they should be reported.
#[derive(Debug, Clone)]
pub struct RosterCsvSource {
    candidates: Vec<Candidate>,
}

impl RosterCsvSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut candidates = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            // Header is line 1.
            let line = index as u64 + 2;
            candidates.push(row.into_candidate(line)?);
        }

        Ok(Self { candidates })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

#[async_trait]
impl CandidateSource for RosterCsvSource {
    fn data_source(&self) -> DataSource {
        DataSource::Roster
    }

    async fn fetch(&self, _skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError> {
        Ok(self.candidates.clone())
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(rename = "Education", default)]
    education: String,
}

impl RosterRow {
    fn into_candidate(self, line: u64) -> Result<Candidate, RosterImportError> {
        if self.name.is_empty() {
            return Err(RosterImportError::MissingName { line });
        }

        let skills = self
            .skills
            .split(';')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        let education = self
            .education
            .split('|')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| parse_education(entry, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Candidate {
            name: self.name,
            email: self.email,
            skills,
            education,
        })
    }
}

fn parse_education(entry: &str, line: u64) -> Result<EducationRecord, RosterImportError> {
    let (country, end_date) = match entry.rsplit_once(':') {
        Some((country, end_date)) => (country.trim(), Some(end_date.trim())),
        None => (entry, None),
    };

    if country.is_empty() {
        return Err(RosterImportError::InvalidEducation {
            line,
            entry: entry.to_string(),
        });
    }

    let end_date = end_date.filter(|value| !value.is_empty());
    Ok(EducationRecord::from_reported(country, end_date))
}

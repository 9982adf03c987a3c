use crate::workflows::sourcing::domain::{Candidate, EducationRecord};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use tracing::debug;

/// Elasticsearch-style query matching any of the requested skills.
pub(super) fn search_request(skills: &BTreeSet<String>, size: u16) -> Value {
    let terms: Vec<String> = skills.iter().map(|skill| skill.to_lowercase()).collect();
    json!({
        "query": {
            "bool": {
                "must": [
                    { "terms": { "skills": terms } }
                ]
            }
        },
        "size": size,
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<PdlPerson>>,
}

impl SearchResponse {
    pub(super) fn into_candidates(self) -> Vec<Candidate> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .filter_map(|person| {
                let candidate = person.into_candidate();
                if candidate.is_none() {
                    debug!("skipping provider record without a name");
                }
                candidate
            })
            .collect()
    }
}

// Contact fields arrive as `true` instead of strings on plans without contact access, and
// list fields may be `null`.
#[derive(Debug, Deserialize)]
struct PdlPerson {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    work_email: Value,
    #[serde(default)]
    emails: Value,
    #[serde(default)]
    personal_emails: Value,
    #[serde(default)]
    skills: Option<Vec<String>>,
    #[serde(default)]
    education: Option<Vec<PdlEducation>>,
}

#[derive(Debug, Deserialize)]
struct PdlEducation {
    #[serde(default)]
    school: Option<PdlSchool>,
    #[serde(default)]
    end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PdlSchool {
    #[serde(default)]
    location: Option<PdlLocation>,
}

#[derive(Debug, Deserialize)]
struct PdlLocation {
    #[serde(default)]
    country: Option<String>,
}

impl PdlPerson {
    fn into_candidate(self) -> Option<Candidate> {
        let name = self
            .full_name
            .map(|name| title_case(name.trim()))
            .filter(|name| !name.is_empty())?;

        let email = string_value(&self.work_email)
            .or_else(|| first_address(&self.emails))
            .or_else(|| first_address(&self.personal_emails))
            .unwrap_or_default();

        let skills: BTreeSet<String> = self
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();

        let education = self
            .education
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                let country = entry
                    .school
                    .and_then(|school| school.location)
                    .and_then(|location| location.country)
                    .unwrap_or_default();
                EducationRecord::from_reported(country, entry.end_date.as_deref())
            })
            .collect();

        Some(Candidate {
            name,
            email,
            skills,
            education,
        })
    }
}

fn string_value(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn first_address(value: &Value) -> Option<String> {
    value.as_array()?.iter().find_map(|entry| {
        string_value(entry).or_else(|| entry.get("address").and_then(string_value))
    })
}

// The provider lowercases names.
fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

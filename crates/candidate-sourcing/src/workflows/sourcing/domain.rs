use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One entry of a candidate's education history, in the order the source reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub country: String,
    pub end_year: Option<i32>,
}

impl EducationRecord {
    pub fn new(country: impl Into<String>, end_year: Option<i32>) -> Self {
        Self {
            country: country.into(),
            end_year,
        }
    }

    /// Build a record from a provider end-date string such as `"2020-05"` or `"2012"`.
    pub fn from_reported(country: impl Into<String>, end_date: Option<&str>) -> Self {
        Self::new(country, end_date.and_then(parse_end_year))
    }
}

/// Year from the first four characters of a reported end date.
///
/// Missing, short, or non-numeric prefixes yield `None`.
pub fn parse_end_year(raw: &str) -> Option<i32> {
    let prefix = raw.get(..4)?;
    if !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// A person returned by a candidate source. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub skills: BTreeSet<String>,
    pub education: Vec<EducationRecord>,
}

/// Heuristic work-authorization bucket inferred from education history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisaStatus {
    CitizenOrGc,
    OptStem,
    H1b,
    ForeignH1b,
    Unknown,
}

impl VisaStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CitizenOrGc,
            Self::OptStem,
            Self::H1b,
            Self::ForeignH1b,
            Self::Unknown,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CitizenOrGc => "Citizen/GC",
            Self::OptStem => "OPT/STEM",
            Self::H1b => "H1B",
            Self::ForeignH1b => "Foreign/H1B",
            Self::Unknown => "Unknown",
        }
    }

    const fn code(self) -> &'static str {
        match self {
            Self::CitizenOrGc => "citizen_or_gc",
            Self::OptStem => "opt_stem",
            Self::H1b => "h1b",
            Self::ForeignH1b => "foreign_h1b",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VisaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisaStatus {
    type Err = UnknownVisaLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "citizen" | "gc" | "green card" => return Ok(Self::CitizenOrGc),
            "opt" | "stem" => return Ok(Self::OptStem),
            _ => {}
        }

        Self::ordered()
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(&normalized) || status.code() == normalized
            })
            .ok_or_else(|| UnknownVisaLabel(raw.to_string()))
    }
}

impl Serialize for VisaStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VisaStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The visa constraint a job posting places on candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisaRequirement {
    #[default]
    Any,
    Status(VisaStatus),
}

impl VisaRequirement {
    /// Only a citizen/green-card requirement removes candidates; every other value admits all.
    pub fn admits(self, status: VisaStatus) -> bool {
        match self {
            Self::Status(VisaStatus::CitizenOrGc) => status == VisaStatus::CitizenOrGc,
            Self::Any | Self::Status(_) => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Status(status) => status.label(),
        }
    }
}

impl fmt::Display for VisaRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisaRequirement {
    type Err = UnknownVisaLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "none" => Ok(Self::Any),
            _ => raw.parse().map(Self::Status),
        }
    }
}

impl Serialize for VisaRequirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VisaRequirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(value) => value.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::Any),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized visa status '{0}'")]
pub struct UnknownVisaLabel(pub String);

/// Candidate annotated with the inferred status and placeholder relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub inferred_status: VisaStatus,
    pub match_score: u8,
    /// Always `true`: candidates the requirement excludes are dropped, not returned flagged.
    pub eligible: bool,
    pub matched_skills: Vec<String>,
}

/// Job posting submitted for sourcing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub visa_requirement: VisaRequirement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_year_reads_four_digit_prefix() {
        assert_eq!(parse_end_year("2020-05"), Some(2020));
        assert_eq!(parse_end_year("2012"), Some(2012));
        assert_eq!(parse_end_year("201"), None);
        assert_eq!(parse_end_year("May 2020"), None);
        assert_eq!(parse_end_year(""), None);
        assert_eq!(parse_end_year("-202"), None);
    }

    #[test]
    fn visa_status_accepts_labels_and_codes() {
        assert_eq!("Citizen/GC".parse(), Ok(VisaStatus::CitizenOrGc));
        assert_eq!("citizen_or_gc".parse(), Ok(VisaStatus::CitizenOrGc));
        assert_eq!("opt/stem".parse(), Ok(VisaStatus::OptStem));
        assert_eq!("FOREIGN_H1B".parse(), Ok(VisaStatus::ForeignH1b));
        assert!("tourist".parse::<VisaStatus>().is_err());
    }

    #[test]
    fn requirement_defaults_to_any() {
        assert_eq!("None".parse(), Ok(VisaRequirement::Any));
        assert_eq!("".parse(), Ok(VisaRequirement::Any));

        let posting: JobPosting =
            serde_json::from_str(r#"{"title":"Java Lead","description":"Spring"}"#)
                .expect("posting parses");
        assert_eq!(posting.visa_requirement, VisaRequirement::Any);

        let posting: JobPosting = serde_json::from_str(
            r#"{"title":"Java Lead","description":"Spring","visa_requirement":null}"#,
        )
        .expect("posting parses");
        assert_eq!(posting.visa_requirement, VisaRequirement::Any);
    }

    #[test]
    fn only_citizen_requirement_excludes() {
        let citizen = VisaRequirement::Status(VisaStatus::CitizenOrGc);
        assert!(citizen.admits(VisaStatus::CitizenOrGc));
        assert!(!citizen.admits(VisaStatus::H1b));
        assert!(!citizen.admits(VisaStatus::OptStem));

        for status in VisaStatus::ordered() {
            assert!(VisaRequirement::Any.admits(status));
            assert!(VisaRequirement::Status(VisaStatus::H1b).admits(status));
        }
    }

    #[test]
    fn statuses_serialize_as_labels() {
        let json = serde_json::to_string(&VisaStatus::ForeignH1b).expect("serializes");
        assert_eq!(json, "\"Foreign/H1B\"");
    }
}

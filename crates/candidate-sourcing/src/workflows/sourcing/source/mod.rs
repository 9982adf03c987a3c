//! Candidate sources. The service only sees [`CandidateSource`]; whether records came from
//! the live provider, the static roster, or a CSV export is reported through
//! [`DataSource`] for diagnostics only.

mod fallback;
mod pdl;
mod roster;

pub use fallback::StaticCandidateSource;
pub use pdl::PdlCandidateSource;
pub use roster::{RosterCsvSource, RosterImportError};

use super::domain::Candidate;
use crate::config::ProviderConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeSet;

/// Where a batch of candidates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Static,
    Roster,
}

impl DataSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "People Data Labs search",
            Self::Static => "Static fallback roster",
            Self::Roster => "CSV roster import",
        }
    }
}

#[async_trait]
pub trait CandidateSource: Send + Sync {
    fn data_source(&self) -> DataSource;

    /// Return candidates for the requested skills. No ordering guarantee.
    async fn fetch(&self, skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError>;
}

/// Failure of the people-search provider. Callers recover with the static roster.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no provider credential configured")]
    MissingCredential,
    #[error("failed to build provider client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("provider unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

/// Live or fallback source chosen from configuration.
pub enum ConfiguredCandidateSource {
    Live(PdlCandidateSource),
    Static(StaticCandidateSource),
}

impl ConfiguredCandidateSource {
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        if config.is_live() {
            PdlCandidateSource::new(config).map(Self::Live)
        } else {
            Ok(Self::Static(StaticCandidateSource))
        }
    }
}

#[async_trait]
impl CandidateSource for ConfiguredCandidateSource {
    fn data_source(&self) -> DataSource {
        match self {
            Self::Live(source) => source.data_source(),
            Self::Static(source) => source.data_source(),
        }
    }

    async fn fetch(&self, skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError> {
        match self {
            Self::Live(source) => source.fetch(skills).await,
            Self::Static(source) => source.fetch(skills).await,
        }
    }
}

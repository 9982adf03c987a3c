//! Candidate sourcing: provider fetch, visa-status inference, requirement filtering, and
//! placeholder scoring, plus the bench-consultant pitch generator.

pub mod bench;
pub mod classifier;
pub mod domain;
pub mod ranking;
pub mod router;
pub mod service;
pub mod skills;
pub mod source;

#[cfg(test)]
mod tests;

pub use bench::{market_bench, BenchConsultant, BenchPitch, MarketOpportunity};
pub use classifier::{check_as_of_year, infer, UnsupportedYear};
pub use domain::{
    Candidate, EducationRecord, JobPosting, RankedCandidate, UnknownVisaLabel, VisaRequirement,
    VisaStatus,
};
pub use ranking::{rank_and_filter, FixedMatchScorer, MatchScorer, RandomMatchScorer};
pub use router::{sourcing_router, SourceCandidatesRequest, SourceCandidatesResponse};
pub use service::{SourcingReport, SourcingService};
pub use skills::extract_skills;
pub use source::{
    CandidateSource, ConfiguredCandidateSource, DataSource, PdlCandidateSource, ProviderError,
    RosterCsvSource, RosterImportError, StaticCandidateSource,
};

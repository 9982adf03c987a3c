//! Candidate sourcing with heuristic work-authorization inference.
//!
//! Candidates come from a people-search provider (or a static roster when no credential is
//! configured), get a visa-status inference from their education history, and are filtered
//! against the job's requirement before scoring.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

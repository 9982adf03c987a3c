use super::classifier::infer;
use super::domain::{Candidate, RankedCandidate, VisaRequirement};
use crate::config::ScoringConfig;
use rand::Rng;
use std::collections::BTreeSet;

/// Relevance scoring seam so callers can swap the placeholder for a real model.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &Candidate) -> u8;
}

/// Placeholder scorer drawing uniformly from a configured inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct RandomMatchScorer {
    min: u8,
    max: u8,
}

impl RandomMatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        let max = config.max_score.min(100);
        Self {
            min: config.min_score.min(max),
            max,
        }
    }
}

impl Default for RandomMatchScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl MatchScorer for RandomMatchScorer {
    fn score(&self, _candidate: &Candidate) -> u8 {
        rand::rng().random_range(self.min..=self.max)
    }
}

/// Scorer returning the same value for every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMatchScorer(pub u8);

impl MatchScorer for FixedMatchScorer {
    fn score(&self, _candidate: &Candidate) -> u8 {
        self.0
    }
}

/// Classify, filter, and score candidates.
///
/// Candidates the requirement does not admit are dropped before scoring. Survivors keep
/// their input order.
pub fn rank_and_filter<M>(
    candidates: &[Candidate],
    requirement: VisaRequirement,
    skills_context: &BTreeSet<String>,
    as_of_year: i32,
    scorer: &M,
) -> Vec<RankedCandidate>
where
    M: MatchScorer + ?Sized,
{
    candidates
        .iter()
        .filter_map(|candidate| {
            let inferred_status = infer(&candidate.education, as_of_year);
            if !requirement.admits(inferred_status) {
                return None;
            }

            Some(RankedCandidate {
                candidate: candidate.clone(),
                inferred_status,
                match_score: scorer.score(candidate).min(100),
                eligible: true,
                matched_skills: matched_skills(candidate, skills_context),
            })
        })
        .collect()
}

fn matched_skills(candidate: &Candidate, skills_context: &BTreeSet<String>) -> Vec<String> {
    candidate
        .skills
        .iter()
        .filter(|skill| {
            skills_context
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(skill))
        })
        .cloned()
        .collect()
}

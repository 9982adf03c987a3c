use candidate_sourcing::workflows::sourcing::{
    infer, rank_and_filter, Candidate, EducationRecord, FixedMatchScorer, RosterCsvSource,
    VisaRequirement, VisaStatus,
};
use std::collections::BTreeSet;

const AS_OF: i32 = 2024;

fn candidate(name: &str, education: Vec<EducationRecord>) -> Candidate {
    Candidate {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        skills: BTreeSet::new(),
        education,
    }
}

#[test]
fn foreign_histories_never_reach_us_buckets() {
    let histories = vec![
        vec![EducationRecord::new("India", Some(2001))],
        vec![
            EducationRecord::new("Canada", Some(1999)),
            EducationRecord::new("Brazil", None),
        ],
        vec![EducationRecord::new("United Kingdom", Some(2023))],
    ];

    for history in histories {
        assert_eq!(infer(&history, AS_OF), VisaStatus::ForeignH1b);
    }
}

#[test]
fn boundaries_across_the_full_range() {
    let expected = |years: i32| match years {
        y if y >= 10 => VisaStatus::CitizenOrGc,
        y if y <= 3 => VisaStatus::OptStem,
        _ => VisaStatus::H1b,
    };

    for years in -2..=15 {
        let history = vec![EducationRecord::new("United States", Some(AS_OF - years))];
        assert_eq!(infer(&history, AS_OF), expected(years), "{years} years out");
    }
}

#[test]
fn evaluation_year_moves_the_classification() {
    let history = vec![EducationRecord::from_reported("USA", Some("2016-12"))];
    assert_eq!(infer(&history, 2019), VisaStatus::OptStem);
    assert_eq!(infer(&history, 2020), VisaStatus::H1b);
    assert_eq!(infer(&history, 2026), VisaStatus::CitizenOrGc);
}

#[test]
fn worked_examples_filter_as_documented() {
    let alex = candidate(
        "Alex",
        vec![
            EducationRecord::from_reported("China", Some("2018")),
            EducationRecord::from_reported("United States", Some("2020")),
        ],
    );
    let sarah = candidate(
        "Sarah",
        vec![EducationRecord::from_reported("United States", Some("2012"))],
    );
    let input = vec![alex, sarah];

    let requirement: VisaRequirement = "Citizen/GC".parse().expect("known label");
    let ranked = rank_and_filter(
        &input,
        requirement,
        &BTreeSet::new(),
        AS_OF,
        &FixedMatchScorer(95),
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].candidate.name, "Sarah");
    assert_eq!(ranked[0].inferred_status, VisaStatus::CitizenOrGc);
    assert_eq!(input.len() - ranked.len(), 1);
}

#[test]
fn roster_import_feeds_the_pipeline() {
    let csv = "Name,Email,Skills,Education\n\
Ana,ana@example.com,Java;AWS,Peru:2009|United States:2013\n\
Ben,ben@example.com,Python,United States:2019|Germany:2021\n\
Cho,cho@example.com,Go,Korea:2015\n";

    let roster = RosterCsvSource::from_reader(csv.as_bytes()).expect("roster imports");
    let ranked = rank_and_filter(
        roster.candidates(),
        VisaRequirement::Any,
        &["java".to_string()].into_iter().collect(),
        AS_OF,
        &FixedMatchScorer(90),
    );

    let summary: Vec<_> = ranked
        .iter()
        .map(|r| (r.candidate.name.as_str(), r.inferred_status, r.matched_skills.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Ana", VisaStatus::CitizenOrGc, 1),
            ("Ben", VisaStatus::H1b, 0),
            ("Cho", VisaStatus::ForeignH1b, 0),
        ]
    );
}

use crate::infra::{configured_sourcing_service, parse_requirement, parse_year};
use candidate_sourcing::config::AppConfig;
use candidate_sourcing::error::AppError;
use candidate_sourcing::telemetry;
use candidate_sourcing::workflows::sourcing::{
    market_bench, BenchConsultant, BenchPitch, JobPosting, RandomMatchScorer, RosterCsvSource,
    SourcingReport, SourcingService, VisaRequirement,
};
use chrono::{Datelike, Local};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SourceArgs {
    /// Job title shown in the report
    #[arg(long)]
    pub(crate) title: String,
    /// Job description used for skill extraction
    #[arg(long)]
    pub(crate) description: String,
    /// Visa requirement (Any, Citizen/GC, OPT/STEM, H1B, Foreign/H1B)
    #[arg(long, default_value = "Any", value_parser = parse_requirement)]
    pub(crate) visa_requirement: VisaRequirement,
    /// Evaluation year for visa inference (defaults to the current year)
    #[arg(long, value_parser = parse_year)]
    pub(crate) as_of_year: Option<i32>,
    /// Optional CSV roster export used instead of the configured provider
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BenchArgs {
    /// Consultant name used in the pitch
    #[arg(long)]
    pub(crate) name: String,
    /// Resume text or a comma-separated tech stack
    #[arg(long)]
    pub(crate) resume_text: String,
}

pub(crate) async fn run_source(args: SourceArgs) -> Result<(), AppError> {
    let SourceArgs {
        title,
        description,
        visa_requirement,
        as_of_year,
        roster_csv,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    let as_of_year = as_of_year.unwrap_or_else(|| Local::now().year());
    let posting = JobPosting {
        title,
        description,
        visa_requirement,
    };

    let report = match roster_csv {
        Some(path) => {
            let roster = RosterCsvSource::from_path(path)?;
            let service = SourcingService::new(
                Arc::new(roster),
                Arc::new(RandomMatchScorer::new(config.scoring)),
            );
            service.source_candidates(&posting, as_of_year).await
        }
        None => {
            let service = configured_sourcing_service(&config)?;
            service.source_candidates(&posting, as_of_year).await
        }
    };

    render_sourcing_report(&report, as_of_year);
    Ok(())
}

pub(crate) fn run_bench(args: BenchArgs) {
    let consultant = BenchConsultant {
        name: args.name,
        resume_text: args.resume_text,
    };
    render_bench_pitch(&market_bench(&consultant));
}

pub(crate) fn render_sourcing_report(report: &SourcingReport, as_of_year: i32) {
    println!("Candidate sourcing report");
    println!(
        "Job: {} | requirement {} | evaluated {}",
        report.job_title, report.visa_requirement, as_of_year
    );
    println!("Data source: {}", report.data_source.label());
    if !report.skills.is_empty() {
        println!("Skills queried: {}", report.skills.join(", "));
    }
    println!(
        "Scanned {} | verified {} | hidden by visa filter {}",
        report.total_scanned,
        report.verified_count,
        report.hidden_count()
    );

    if report.candidates.is_empty() {
        println!("\nVerified candidates: none");
        return;
    }

    println!("\nVerified candidates");
    for ranked in &report.candidates {
        let matched = if ranked.matched_skills.is_empty() {
            String::new()
        } else {
            format!(" | matches {}", ranked.matched_skills.join(", "))
        };
        println!(
            "- {} <{}> | {} | score {}%{}",
            ranked.candidate.name,
            ranked.candidate.email,
            ranked.inferred_status,
            ranked.match_score,
            matched
        );
    }
}

pub(crate) fn render_bench_pitch(pitch: &BenchPitch) {
    println!("Bench marketing pitch for {}", pitch.consultant);
    if pitch.tech_stack.is_empty() {
        println!("Detected stack: none");
    } else {
        println!("Detected stack: {}", pitch.tech_stack.join(", "));
    }

    println!("\nMarket opportunities");
    for opportunity in &pitch.market_opportunities {
        println!(
            "- {} at {} ({} match)",
            opportunity.title, opportunity.company, opportunity.match_label
        );
    }

    println!("\nGenerated email\n{}", pitch.auto_generated_email);
}

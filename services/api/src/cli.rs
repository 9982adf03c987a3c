use crate::demo::{run_bench, run_source, BenchArgs, SourceArgs};
use crate::server;
use candidate_sourcing::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Candidate Sourcing Service",
    about = "Source candidates, infer visa status, and pitch bench consultants",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run one sourcing request from the command line and print the verified list
    Source(SourceArgs),
    /// Generate a market pitch for a bench consultant
    Bench(BenchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Source(args) => run_source(args).await,
        Command::Bench(args) => {
            run_bench(args);
            Ok(())
        }
    }
}

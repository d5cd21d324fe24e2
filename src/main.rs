use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use thiserror::Error;
use tracing::info;

use applicant_matcher::api::{RankRequest, RankResponse};
use applicant_matcher::logging;
use applicant_matcher::matching::RankingPipeline;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "applicant-matcher",
    about = "Rank applicants against a job requirement record"
)]
struct Cli {
    /// Path to a RankRequest JSON document (job + applicants)
    input: PathBuf,

    /// Keep only the top N results
    #[arg(long, env = "AM_RANK_LIMIT")]
    limit: Option<usize>,

    /// Pretty-print the JSON response
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rank request: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(cli: Cli) -> Result<(), InputError> {
    let raw = std::fs::read_to_string(&cli.input).map_err(|source| InputError::Io {
        path: cli.input.clone(),
        source,
    })?;
    let request: RankRequest = serde_json::from_str(&raw)?;

    info!(
        applicants = request.applicants.len(),
        "scoring rank request"
    );

    let pipeline = RankingPipeline::default();
    let ranked = pipeline.rank_applicants(&request.job, &request.applicants);
    let response = RankResponse::from_ranked(ranked, cli.limit.or(request.limit));

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");

    Ok(())
}

fn main() {
    dotenv().ok();
    logging::init_tracing_subscriber("applicant-matcher");
    logging::install_tracing_panic_hook("applicant-matcher");

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "ranking failed");
        std::process::exit(1);
    }
}

mod cli;
mod telemetry;

use chrono::Utc;
use clap::Parser;
use pkgscore::analyze;
use pkgscore::analyze::bus_factor::ContributorTally;
use pkgscore::config;
use pkgscore::error::ScoreError;
use pkgscore::report;
use pkgscore::scan;
use pkgscore::types::config::ScoreConfig;
use tracing::{debug, info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DATA_ERROR: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    let settings = loaded.clone().unwrap_or_default();
    telemetry::init(&telemetry::directive(
        cli.verbose,
        cli.quiet,
        settings.log_level(),
    ))
    .map_err(|e| ScoreError::ConfigParse(e.to_string()))?;
    if loaded.is_none() {
        debug!(dir = %cwd.display(), "no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
    }

    match cli.command {
        cli::Commands::Score(cmd) => {
            let mut facts = scan::facts::load_facts(&cmd.facts)?;
            if let Some(repo) = &cmd.repo {
                facts.commits = scan::git_history::commit_history(repo)?;
            }
            let top_n = resolve_top_n(cmd.top_n, &settings);
            let now = cmd.now.unwrap_or_else(Utc::now);

            let score_report = analyze::score(&facts, top_n, now)?;
            if score_report.scores.license == 0.0 {
                warn!("required license not found; net score is gated to zero");
            }
            info!(
                net_score = score_report.scores.net_score,
                total_commits = score_report.total_commits,
                "scored package"
            );

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&score_report, output_format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::BusFactor(cmd) => {
            if let Some(url) = &cmd.clone {
                scan::git_history::clone_repository(url, &cmd.path)?;
            }
            if !cmd.path.exists() {
                return Err(ScoreError::InputNotFound(cmd.path.display().to_string()));
            }

            let commits = scan::git_history::commit_history(&cmd.path)?;
            let top_n = resolve_top_n(cmd.top_n, &settings);
            let tally = ContributorTally::from_commits(&commits);
            let ratio = tally.ratio(top_n)?;

            println!("bus factor (top {top_n}): {ratio:.3}");
            for (author, commits) in tally.top(top_n) {
                println!("- {author}: {commits}");
            }
            println!(
                "{} commits, {} distinct authors",
                tally.total_commits(),
                tally.distinct_authors()
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Urls(cmd) => {
            let urls = scan::urls::read_url_list(&cmd.file)?;
            for url in &urls {
                info!(url = url.as_str(), "processing url");
                println!("{url}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn resolve_top_n(flag: Option<usize>, settings: &ScoreConfig) -> usize {
    flag.unwrap_or_else(|| settings.top_n())
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ScoreError::Data(_) => exit_code::DATA_ERROR,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}

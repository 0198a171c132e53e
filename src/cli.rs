use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pkgscore",
    version,
    about = "Composite package quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a package from a JSON facts file
    Score(ScoreCommand),
    /// Compute the bus factor of a local git repository
    BusFactor(BusFactorCommand),
    /// List the package URLs in a URL file
    Urls(UrlsCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub facts: PathBuf,
    /// Read commit history from this git repository instead of the facts file
    #[arg(long)]
    pub repo: Option<PathBuf>,
    #[arg(long)]
    pub top_n: Option<usize>,
    /// Reference time for the responsiveness score (RFC 3339)
    #[arg(long, value_parser = parse_reference_time)]
    pub now: Option<DateTime<Utc>>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BusFactorCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub top_n: Option<usize>,
    /// Clone this repository into PATH first
    #[arg(long)]
    pub clone: Option<String>,
}

#[derive(Args)]
pub struct UrlsCommand {
    pub file: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_reference_time(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_command_parses_reference_time() {
        let cli = Cli::try_parse_from([
            "pkgscore",
            "score",
            "facts.json",
            "--now",
            "2024-06-01T00:00:00Z",
            "--format",
            "json",
        ])
        .expect("arguments should parse");

        match cli.command {
            Commands::Score(cmd) => {
                assert_eq!(
                    cmd.now.map(|now| now.timestamp()),
                    Some(1_717_200_000)
                );
                assert!(matches!(cmd.format, ReportFormat::Json));
                assert!(cmd.top_n.is_none());
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn malformed_reference_time_is_rejected() {
        let result = Cli::try_parse_from(["pkgscore", "score", "facts.json", "--now", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["pkgscore", "-q", "-v", "urls", "urls.txt"]);
        assert!(result.is_err());
    }
}

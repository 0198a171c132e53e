pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::types::scoring::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::scoring::{ContributorShare, ScoreReport, ScoreVector};
    use chrono::{TimeZone, Utc};

    pub fn sample_report() -> ScoreReport {
        ScoreReport {
            package: Some("demo".to_string()),
            scores: ScoreVector::new(0.75, 0.5, 0.25, 1.0, 1.0),
            total_commits: 8,
            top_n: 3,
            top_contributors: vec![ContributorShare {
                author: "ann".to_string(),
                commits: 6,
                share: 0.75,
            }],
            reference_time: Utc
                .with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }
}

pub mod bus_factor;
pub mod correctness;
pub mod license;
pub mod net;
pub mod ramp_up;
pub mod responsiveness;

use crate::error::DataError;
use crate::types::facts::PackageFacts;
use crate::types::scoring::{ContributorShare, ScoreReport, ScoreVector};
use bus_factor::ContributorTally;
use chrono::{DateTime, Utc};

/// Scores one package from its already-fetched facts.
///
/// `now` is the reference time for the responsiveness decay; pass a fixed
/// instant for reproducible output.
pub fn score(
    facts: &PackageFacts,
    top_n: usize,
    now: DateTime<Utc>,
) -> Result<ScoreReport, DataError> {
    let readme = facts
        .readme
        .as_deref()
        .ok_or(DataError::MissingField("readme"))?;
    let weekly_downloads = facts
        .weekly_downloads
        .ok_or(DataError::MissingField("weekly_downloads"))?;
    if weekly_downloads.is_nan() {
        return Err(DataError::InvalidValue {
            field: "weekly_downloads",
            reason: "not a number".to_string(),
        });
    }
    let last_publish_ms = facts
        .last_publish_ms
        .ok_or(DataError::MissingField("last_publish_ms"))?;

    let tally = ContributorTally::from_commits(&facts.commits);
    let bus_factor = tally.ratio(top_n)?;
    let total_commits = tally.total_commits();
    let top_contributors = tally
        .top(top_n)
        .into_iter()
        .map(|(author, commits)| ContributorShare {
            author: author.to_string(),
            commits,
            share: commits as f64 / total_commits as f64,
        })
        .collect();

    let scores = ScoreVector::new(
        bus_factor,
        responsiveness::responsive_maintainer(last_publish_ms, now),
        ramp_up::ramp_up(weekly_downloads),
        correctness::correctness(&facts.issues),
        license::license_check(readme),
    );

    Ok(ScoreReport {
        package: facts.name.clone(),
        scores,
        total_commits,
        top_n,
        top_contributors,
        reference_time: now,
    })
}

use chrono::{DateTime, Utc};
use serde::Serialize;

pub type Score = f64;

/// The five sub-scores plus the derived net score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreVector {
    pub bus_factor: Score,
    pub responsive_maintainer: Score,
    pub ramp_up: Score,
    pub correctness: Score,
    pub license: Score,
    pub net_score: Score,
}

impl ScoreVector {
    pub fn new(
        bus_factor: Score,
        responsive_maintainer: Score,
        ramp_up: Score,
        correctness: Score,
        license: Score,
    ) -> Self {
        Self {
            bus_factor,
            responsive_maintainer,
            ramp_up,
            correctness,
            license,
            net_score: crate::analyze::net::net_score(
                license,
                bus_factor,
                responsive_maintainer,
                correctness,
                ramp_up,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorShare {
    pub author: String,
    pub commits: usize,
    pub share: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub package: Option<String>,
    pub scores: ScoreVector,
    pub total_commits: usize,
    pub top_n: usize,
    pub top_contributors: Vec<ContributorShare>,
    pub reference_time: DateTime<Utc>,
}

use crate::error::DataError;
use crate::types::facts::CommitRecord;
use indexmap::IndexMap;

pub const DEFAULT_TOP_N: usize = 3;

/// Commit counts per author, kept in first-seen order.
///
/// Authors are matched by exact string equality; the same person committing
/// under two names is counted as two contributors.
/// Non-UTF-8 names from git arrive byte-escaped (`Jos\xe9`), never merged.
#[derive(Debug, Clone, Default)]
pub struct ContributorTally {
    counts: IndexMap<String, usize>,
    total_commits: usize,
}

impl ContributorTally {
    pub fn from_commits(commits: &[CommitRecord]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for commit in commits {
            if commit.author.is_empty() {
                continue;
            }
            *counts.entry(commit.author.clone()).or_insert(0) += 1;
        }
        Self {
            counts,
            total_commits: commits.len(),
        }
    }

    /// Every commit in the history, including ones without an author.
    pub fn total_commits(&self) -> usize {
        self.total_commits
    }

    pub fn distinct_authors(&self) -> usize {
        self.counts.len()
    }

    /// Authors by commit count, descending. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked = self
            .counts
            .iter()
            .map(|(author, count)| (author.as_str(), *count))
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, top_n: usize) -> Vec<(&str, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(top_n);
        ranked
    }

    pub fn ratio(&self, top_n: usize) -> Result<f64, DataError> {
        if top_n == 0 {
            return Err(DataError::InvalidTopN(top_n));
        }
        if self.total_commits == 0 {
            return Err(DataError::EmptyHistory);
        }
        let top_sum: usize = self.top(top_n).iter().map(|(_, count)| count).sum();
        Ok(top_sum as f64 / self.total_commits as f64)
    }
}

/// Share of all commits made by the `top_n` most active authors.
pub fn bus_factor(commits: &[CommitRecord], top_n: usize) -> Result<f64, DataError> {
    ContributorTally::from_commits(commits).ratio(top_n)
}

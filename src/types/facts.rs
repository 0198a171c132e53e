use serde::{Deserialize, Serialize};

/// One commit in the project history, identified only by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub author: String,
}

impl CommitRecord {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub is_bug: bool,
    pub status: String,
}

impl Issue {
    pub fn new(is_bug: bool, status: impl Into<String>) -> Self {
        Self {
            is_bug,
            status: status.into(),
        }
    }

    /// Only the exact status `open` counts as open.
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }
}

/// Raw facts about a package, as handed over by the fetching collaborators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageFacts {
    pub name: Option<String>,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    pub readme: Option<String>,
    pub weekly_downloads: Option<f64>,
    pub last_publish_ms: Option<i64>,
}

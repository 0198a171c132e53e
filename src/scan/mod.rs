//! Collaborators that fetch the raw facts the scoring engine consumes.

pub mod facts;
pub mod git_history;
pub mod urls;

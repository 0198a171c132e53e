use crate::error::{Result, ScoreError};
use crate::types::facts::CommitRecord;
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, info};

/// One record per commit reachable from HEAD, newest first.
///
/// A repository with no commits yet yields an empty history rather than an
/// error, so the caller sees the degenerate input itself.
pub fn commit_history(root: &Path) -> Result<Vec<CommitRecord>> {
    if !has_commits(root)? {
        debug!(root = %root.display(), "repository has no commits");
        return Ok(Vec::new());
    }

    let output = run_git(
        Command::new("git")
            .arg("-C")
            .arg(root)
            .arg("log")
            .arg("--format=%an"),
    )?;

    let commits = parse_authors(&output.stdout);
    debug!(root = %root.display(), commits = commits.len(), "read commit history");
    Ok(commits)
}

pub fn clone_repository(url: &str, dest: &Path) -> Result<()> {
    info!(url, dest = %dest.display(), "cloning repository");
    run_git(
        Command::new("git")
            .arg("clone")
            .arg("--quiet")
            .arg(url)
            .arg(dest),
    )?;
    Ok(())
}

// rev-parse exits 1 on an unborn HEAD and 128 outside a repository.
fn has_commits(root: &Path) -> Result<bool> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .arg("rev-parse")
        .arg("--verify")
        .arg("-q")
        .arg("HEAD")
        .output()
        .map_err(|e| ScoreError::Upstream(format!("failed to run git: {e}")))?;
    match output.status.code() {
        Some(0) => Ok(true),
        Some(1) => Ok(false),
        _ => Err(upstream(&output)),
    }
}

fn parse_authors(stdout: &[u8]) -> Vec<CommitRecord> {
    if stdout.is_empty() {
        return Vec::new();
    }
    let body = stdout.strip_suffix(b"\n").unwrap_or(stdout);
    body.split(|byte| *byte == b'\n')
        .map(|line| CommitRecord::new(author_from_bytes(line)))
        .collect()
}

/// Non-UTF-8 names are kept as escaped bytes so distinct names stay distinct.
fn author_from_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(name) => name.to_string(),
        Err(_) => bytes.escape_ascii().to_string(),
    }
}

fn run_git(command: &mut Command) -> Result<Output> {
    let output = command
        .output()
        .map_err(|e| ScoreError::Upstream(format!("failed to run git: {e}")))?;
    if !output.status.success() {
        return Err(upstream(&output));
    }
    Ok(output)
}

fn upstream(output: &Output) -> ScoreError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    ScoreError::Upstream(format!("git: {}", stderr.trim()))
}

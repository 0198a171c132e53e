use crate::error::{Result, ScoreError};
use crate::types::facts::PackageFacts;
use std::path::Path;
use tracing::debug;

pub fn load_facts(path: &Path) -> Result<PackageFacts> {
    if !path.exists() {
        return Err(ScoreError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let facts: PackageFacts = serde_json::from_str(&content)?;
    debug!(
        path = %path.display(),
        commits = facts.commits.len(),
        issues = facts.issues.len(),
        "loaded package facts"
    );
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_facts_reads_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("facts.json");
        fs::write(
            &path,
            r#"{"name": "demo", "readme": "hi", "weekly_downloads": 10, "last_publish_ms": 0}"#,
        )
        .expect("facts should write");

        let facts = load_facts(&path).expect("facts should load");
        assert_eq!(facts.name.as_deref(), Some("demo"));
        assert_eq!(facts.weekly_downloads, Some(10.0));
        assert!(facts.commits.is_empty());
    }

    #[test]
    fn load_facts_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_facts(&dir.path().join("absent.json")).expect_err("file is absent");
        assert!(matches!(err, ScoreError::InputNotFound(_)));
    }

    #[test]
    fn load_facts_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("facts.json");
        fs::write(&path, "{ not json").expect("facts should write");
        assert!(matches!(load_facts(&path), Err(ScoreError::Json(_))));
    }
}

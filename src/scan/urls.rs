use crate::error::{Result, ScoreError};
use std::path::Path;
use tracing::debug;

/// Reads a newline-separated list of package URLs, skipping blank lines.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ScoreError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ScoreError::EmptyInput(path.display().to_string()));
    }

    let urls = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    debug!(path = %path.display(), urls = urls.len(), "read url list");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn blank_lines_are_dropped() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("urls.txt");
        fs::write(
            &path,
            "https://github.com/a/b\n\n  https://www.npmjs.com/package/c  \r\n\n",
        )
        .expect("url file should write");

        let urls = read_url_list(&path).expect("urls should load");
        assert_eq!(
            urls,
            vec![
                "https://github.com/a/b".to_string(),
                "https://www.npmjs.com/package/c".to_string(),
            ]
        );
    }

    #[test]
    fn whitespace_only_file_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("urls.txt");
        fs::write(&path, " \n\t\n").expect("url file should write");
        assert!(matches!(read_url_list(&path), Err(ScoreError::EmptyInput(_))));
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(matches!(
            read_url_list(&dir.path().join("nope.txt")),
            Err(ScoreError::InputNotFound(_))
        ));
    }
}

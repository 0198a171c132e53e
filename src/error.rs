use thiserror::Error;

/// Degenerate or malformed input that prevents a meaningful score.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("commit history is empty; bus factor is undefined")]
    EmptyHistory,

    #[error("top contributor count must be at least 1 (got {0})")]
    InvalidTopN(usize),

    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("input is empty: {0}")]
    EmptyInput(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;

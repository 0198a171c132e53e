use crate::analyze::bus_factor::DEFAULT_TOP_N;
use crate::error::ScoreError;
use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub bus_factor: Option<BusFactorConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusFactorConfig {
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ScoreConfig {
    pub fn top_n(&self) -> usize {
        self.bus_factor
            .as_ref()
            .and_then(|bus_factor| bus_factor.top_n)
            .unwrap_or(DEFAULT_TOP_N)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.top_n() == 0 {
            return Err(ScoreError::ConfigParse(
                "bus_factor.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

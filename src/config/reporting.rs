use super::traits::ConfigSection;
use crate::error::GaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Log progress every this many generations; 0 disables it.
    pub progress_interval: usize,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            progress_interval: 10,
        }
    }
}

impl ConfigSection for ReportingConfig {
    fn section_name() -> &'static str {
        "reporting"
    }

    fn validate(&self) -> Result<(), GaError> {
        Ok(())
    }
}

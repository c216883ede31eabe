use crate::error::GaError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), GaError>;
}

/// Checks that a probability lies in `[0, 1]`.
pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), GaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GaError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}

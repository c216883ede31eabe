use super::{
    evolution::EvolutionConfig,
    problem::ProblemConfig,
    reporting::ReportingConfig,
    traits::ConfigSection,
};
use crate::error::GaError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables that override file values,
/// e.g. `BITGA_EVOLUTION__POPULATION_SIZE=80`.
pub const DEFAULT_ENV_PREFIX: &str = "BITGA";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub problem: ProblemConfig,
    pub reporting: ReportingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GaError> {
        validate_section(&self.evolution)?;
        validate_section(&self.problem)?;
        in_section::<ProblemConfig>(self.problem.check_objective_arity())?;
        validate_section(&self.reporting)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), GaError> {
    in_section::<S>(section.validate())
}

/// Prefixes configuration messages with the offending section.
fn in_section<S: ConfigSection>(result: Result<(), GaError>) -> Result<(), GaError> {
    result.map_err(|err| match err {
        GaError::Configuration(msg) => {
            GaError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: AppConfig,
    env_prefix: String,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_env_prefix(DEFAULT_ENV_PREFIX)
    }

    pub fn with_env_prefix(prefix: &str) -> Self {
        Self {
            config: AppConfig::default(),
            env_prefix: prefix.to_string(),
        }
    }

    /// Loads a TOML or JSON file (by extension), applies environment overrides
    /// and validates the result. On error the current configuration is kept.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GaError> {
        let source = File::from(path.as_ref());
        self.load(Config::builder().add_source(source))
    }

    pub fn load_from_str(&mut self, contents: &str, format: FileFormat) -> Result<(), GaError> {
        self.load(Config::builder().add_source(File::from_str(contents, format)))
    }

    /// Defaults plus environment overrides only.
    pub fn load_from_env(&mut self) -> Result<(), GaError> {
        self.load(Config::builder())
    }

    fn load(
        &mut self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<(), GaError> {
        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GaError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, GaError> {
        Ok(toml::to_string_pretty(&self.config)?)
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), GaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

use super::traits::ConfigSection;
use crate::engines::evaluation::{BuiltinObjective, Objective};
use crate::error::GaError;
use serde::{Deserialize, Serialize};

/// Largest segment whose ordinal still fits a `u64`.
pub const MAX_BITS_PER_VARIABLE: u32 = 64;

/// Search domain and encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemConfig {
    pub bits_per_variable: u32,
    pub objective: BuiltinObjective,
    /// One entry per decision variable.
    pub bounds: Vec<VariableBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableBounds {
    pub min: f64,
    pub max: f64,
}

impl VariableBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl ProblemConfig {
    pub fn variable_count(&self) -> usize {
        self.bounds.len()
    }

    /// Chromosome length `L`.
    pub fn chromosome_length(&self) -> usize {
        self.bits_per_variable as usize * self.bounds.len()
    }

    /// Checks the configured built-in objective against the number of bounds.
    ///
    /// Only meaningful when `objective` is the one being run; an engine built
    /// around a caller-supplied objective never consults it.
    pub fn check_objective_arity(&self) -> Result<(), GaError> {
        if let Some(arity) = self.objective.arity() {
            if arity != self.bounds.len() {
                return Err(GaError::Configuration(format!(
                    "Objective '{}' takes {} variables but {} bounds were given",
                    self.objective.name(),
                    arity,
                    self.bounds.len()
                )));
            }
        }
        Ok(())
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            bits_per_variable: 16,
            objective: BuiltinObjective::Trigonometric,
            bounds: vec![VariableBounds::new(-10.0, 10.0); 2],
        }
    }
}

impl ConfigSection for ProblemConfig {
    fn section_name() -> &'static str {
        "problem"
    }

    fn validate(&self) -> Result<(), GaError> {
        if self.bits_per_variable < 1 || self.bits_per_variable > MAX_BITS_PER_VARIABLE {
            return Err(GaError::Configuration(format!(
                "Bits per variable must be between 1 and {}, got {}",
                MAX_BITS_PER_VARIABLE, self.bits_per_variable
            )));
        }
        if self.bounds.is_empty() {
            return Err(GaError::Configuration(
                "At least one variable bound is required".to_string(),
            ));
        }
        for (index, bound) in self.bounds.iter().enumerate() {
            if !bound.min.is_finite() || !bound.max.is_finite() || bound.min >= bound.max {
                return Err(GaError::InvalidBounds {
                    index,
                    min: bound.min,
                    max: bound.max,
                });
            }
        }
        Ok(())
    }
}

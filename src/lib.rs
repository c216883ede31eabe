pub mod config;
pub mod engines;
pub mod error;

pub use config::{AppConfig, ConfigManager};
pub use engines::evaluation::{BuiltinObjective, Objective};
pub use engines::generation::{
    BestSolution, EvolutionEngine, EvolutionOutcome, GenerationStats, Genome, Termination,
};
pub use error::{GaError, Result};

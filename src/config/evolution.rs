use super::traits::{check_probability, ConfigSection};
use crate::error::GaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub tournament_size: usize,
    pub tournament_sampling: TournamentSampling,
    /// Copy the best genome found so far unchanged into every new generation.
    pub elite_carry_over: bool,
    pub seed: Option<u64>,
    /// Evaluate and breed on the rayon thread pool.
    pub parallel: bool,
    /// Wall-clock budget checked between generations.
    pub time_limit_secs: Option<f64>,
}

/// How the candidates of one tournament are drawn from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentSampling {
    /// `tournament_size` distinct individuals.
    #[default]
    WithoutReplacement,
    /// `tournament_size` independent draws; an individual may face itself.
    WithReplacement,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            num_generations: 100,
            // one expected flip per 32-bit chromosome
            mutation_rate: 1.0 / 32.0,
            crossover_rate: 0.9,
            tournament_size: 3,
            tournament_sampling: TournamentSampling::WithoutReplacement,
            elite_carry_over: false,
            seed: None,
            parallel: true,
            time_limit_secs: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.num_generations < 1 {
            return Err(GaError::Configuration(
                "Number of generations must be at least 1".to_string(),
            ));
        }
        check_probability("Mutation rate", self.mutation_rate)?;
        check_probability("Crossover rate", self.crossover_rate)?;
        if self.tournament_size < 1 || self.tournament_size > self.population_size {
            return Err(GaError::Configuration(format!(
                "Tournament size must be between 1 and the population size ({}), got {}",
                self.population_size, self.tournament_size
            )));
        }
        if let Some(limit) = self.time_limit_secs {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(GaError::Configuration(format!(
                    "Time limit must be a positive number of seconds, got {}",
                    limit
                )));
            }
        }
        Ok(())
    }
}

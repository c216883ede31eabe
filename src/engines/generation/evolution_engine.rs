use crate::config::{AppConfig, ConfigSection, EvolutionConfig, ProblemConfig};
use crate::engines::evaluation::{BuiltinObjective, Objective};
use crate::engines::generation::{
    best_solution::{BestSolution, BestTracker},
    fitness::{evaluate_genome, Evaluation},
    genome::Genome,
    operators::{crossover, mutate, random_genome, tournament_selection},
};
use crate::error::GaError;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Summary of one evaluated generation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationStats {
    /// 0 is the initial random population.
    pub generation: usize,
    /// Best objective over all generations so far.
    pub best_objective: Option<f64>,
    pub generation_best_fitness: f64,
    /// Mean over genomes with a defined objective.
    pub mean_fitness: Option<f64>,
    pub undefined_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Termination {
    Completed,
    DeadlineReached,
    Cancelled,
}

#[derive(Clone, Debug, Serialize)]
pub struct EvolutionOutcome {
    pub best: Option<BestSolution>,
    pub trace: Vec<GenerationStats>,
    pub final_population: Vec<Genome>,
    pub generations_completed: usize,
    pub termination: Termination,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
}

impl ProgressCallback for () {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        (**self).on_generation_complete(stats);
    }
}

/// Generational GA over binary genomes.
///
/// The engine exclusively owns the population, its fitness record and the
/// best-ever solution. All randomness flows from one seeded master RNG; breeding
/// work is split into pairs that each receive a seed drawn from it up front,
/// so results do not depend on `parallel` or on the thread count.
pub struct EvolutionEngine<O: Objective> {
    evolution: EvolutionConfig,
    problem: ProblemConfig,
    objective: O,
    rng: StdRng,
    population: Vec<Genome>,
    fitness: Vec<f64>,
    best: BestTracker,
    generation: usize,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<O: Objective> EvolutionEngine<O> {
    pub fn new(
        evolution: EvolutionConfig,
        problem: ProblemConfig,
        objective: O,
    ) -> Result<Self, GaError> {
        evolution.validate()?;
        problem.validate()?;

        let rng = match evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            evolution,
            problem,
            objective,
            rng,
            population: Vec::new(),
            fitness: Vec::new(),
            best: BestTracker::new(),
            generation: 0,
            cancel_flag: None,
        })
    }

    /// Uses the evolution and problem sections; `config.problem.objective` is ignored.
    pub fn from_app_config(config: &AppConfig, objective: O) -> Result<Self, GaError> {
        Self::new(config.evolution.clone(), config.problem.clone(), objective)
    }

    /// Stops the run between generations once the flag is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> EvolutionOutcome {
        let started = Instant::now();
        let deadline = self.evolution.time_limit_secs.map(Duration::from_secs_f64);

        info!(
            "Evolving {} genomes of {} bits for {} generations (objective '{}')",
            self.evolution.population_size,
            self.problem.chromosome_length(),
            self.evolution.num_generations,
            self.objective.name()
        );

        self.initialize_population();
        callback.on_generation_start(self.generation);
        let stats = self.evaluate_population();
        callback.on_generation_complete(&stats);
        let mut trace = vec![stats];

        let mut termination = Termination::Completed;
        while self.generation < self.evolution.num_generations {
            if let Some(reason) = self.interruption(started, deadline) {
                warn!(
                    "Stopping after {} of {} generations: {:?}",
                    self.generation, self.evolution.num_generations, reason
                );
                termination = reason;
                break;
            }

            callback.on_generation_start(self.generation + 1);
            let stats = self.advance_generation();
            callback.on_generation_complete(&stats);
            trace.push(stats);
        }

        match self.best.get() {
            Some(best) => info!(
                "Evolution complete after {} generations in {:.2}s. Best objective {:.6} at {:?}",
                self.generation,
                started.elapsed().as_secs_f64(),
                best.objective,
                best.variables
            ),
            None => warn!(
                "Evolution complete after {} generations; objective was undefined everywhere visited",
                self.generation
            ),
        }

        EvolutionOutcome {
            best: self.best.get().cloned(),
            trace,
            final_population: self.population.clone(),
            generations_completed: self.generation,
            termination,
        }
    }

    /// Fresh random population; forgets the best solution and generation count.
    pub fn initialize_population(&mut self) {
        let length = self.problem.chromosome_length();
        self.population = (0..self.evolution.population_size)
            .map(|_| random_genome(length, &mut self.rng))
            .collect();
        self.fitness.clear();
        self.best.clear();
        self.generation = 0;
    }

    /// Scores the current population and updates the best-ever record.
    pub fn evaluate_population(&mut self) -> GenerationStats {
        let problem = &self.problem;
        let objective = &self.objective;

        let evaluations: Vec<Evaluation> = if self.evolution.parallel {
            self.population
                .par_iter()
                .map(|genome| evaluate_genome(genome, problem, objective))
                .collect()
        } else {
            self.population
                .iter()
                .map(|genome| evaluate_genome(genome, problem, objective))
                .collect()
        };

        for (genome, evaluation) in self.population.iter().zip(&evaluations) {
            if self.best.try_update(genome, evaluation, self.generation) {
                debug!(
                    "Generation {}: new best objective {:.6} at {:?}",
                    self.generation, -evaluation.fitness, evaluation.variables
                );
            }
        }

        self.fitness = evaluations.iter().map(|e| e.fitness).collect();
        self.summarize()
    }

    /// Builds the next population from the current snapshot without replacing it.
    pub fn breed_next_generation(&mut self) -> Vec<Genome> {
        if self.population.is_empty() {
            self.initialize_population();
        }
        if self.fitness.len() != self.population.len() {
            self.evaluate_population();
        }

        let size = self.evolution.population_size;
        let mut next_generation = self.carry_over();

        let pairs = size.saturating_sub(next_generation.len()).div_ceil(2);
        let seeds: Vec<u64> = (0..pairs).map(|_| self.rng.gen()).collect();

        let population = &self.population;
        let fitness = &self.fitness;
        let evolution = &self.evolution;
        let breed = |seed: &u64| breed_pair(population, fitness, evolution, *seed);

        let children: Vec<(Genome, Genome)> = if evolution.parallel {
            seeds.par_iter().map(breed).collect()
        } else {
            seeds.iter().map(breed).collect()
        };

        for (child1, child2) in children {
            next_generation.push(child1);
            next_generation.push(child2);
        }

        // odd sizes produce one child too many
        next_generation.truncate(size);
        next_generation
    }

    /// Reproduce, replace and evaluate: one full generation.
    pub fn advance_generation(&mut self) -> GenerationStats {
        let next_generation = self.breed_next_generation();
        self.population = next_generation;
        self.fitness.clear();
        self.generation += 1;

        let stats = self.evaluate_population();
        debug!(
            "Generation {}: best this generation {:.6}, mean {:?}, undefined {}",
            stats.generation, stats.generation_best_fitness, stats.mean_fitness, stats.undefined_count
        );
        stats
    }

    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Fitness aligned with [`population`](Self::population); empty until evaluated.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn best(&self) -> Option<&BestSolution> {
        self.best.get()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn evolution_config(&self) -> &EvolutionConfig {
        &self.evolution
    }

    pub fn problem_config(&self) -> &ProblemConfig {
        &self.problem
    }

    /// Elitism injection point: genomes copied unchanged into the next population.
    fn carry_over(&self) -> Vec<Genome> {
        if !self.evolution.elite_carry_over {
            return Vec::new();
        }
        self.best
            .get()
            .map(|best| vec![best.genome.clone()])
            .unwrap_or_default()
    }

    fn interruption(&self, started: Instant, deadline: Option<Duration>) -> Option<Termination> {
        if let Some(flag) = &self.cancel_flag {
            if flag.load(Ordering::Relaxed) {
                return Some(Termination::Cancelled);
            }
        }
        match deadline {
            Some(limit) if started.elapsed() >= limit => Some(Termination::DeadlineReached),
            _ => None,
        }
    }

    fn summarize(&self) -> GenerationStats {
        let defined: Vec<f64> = self
            .fitness
            .iter()
            .copied()
            .filter(|f| f.is_finite())
            .collect();

        let mean_fitness = if defined.is_empty() {
            None
        } else {
            Some(defined.iter().sum::<f64>() / defined.len() as f64)
        };

        GenerationStats {
            generation: self.generation,
            best_objective: self.best.objective(),
            generation_best_fitness: self
                .fitness
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            mean_fitness,
            undefined_count: self.fitness.len() - defined.len(),
        }
    }
}

impl EvolutionEngine<BuiltinObjective> {
    /// Runs the objective named in the configuration, after validating the
    /// whole configuration including the objective's arity.
    pub fn from_config(config: &AppConfig) -> Result<Self, GaError> {
        config.validate()?;
        Self::from_app_config(config, config.problem.objective)
    }
}

/// Two tournaments, crossover, then mutation of both children, all drawn from
/// a stream seeded for this pair alone.
fn breed_pair(
    population: &[Genome],
    fitness: &[f64],
    config: &EvolutionConfig,
    seed: u64,
) -> (Genome, Genome) {
    let mut rng = StdRng::seed_from_u64(seed);

    let parent1 = tournament_selection(
        population,
        fitness,
        config.tournament_size,
        config.tournament_sampling,
        &mut rng,
    );
    let parent2 = tournament_selection(
        population,
        fitness,
        config.tournament_size,
        config.tournament_sampling,
        &mut rng,
    );

    let (mut child1, mut child2) = crossover(parent1, parent2, config.crossover_rate, &mut rng);

    mutate(&mut child1, config.mutation_rate, &mut rng);
    mutate(&mut child2, config.mutation_rate, &mut rng);

    (child1, child2)
}

use crate::engines::generation::fitness::Evaluation;
use crate::engines::generation::genome::{to_bit_string, Genome};
use serde::Serialize;

/// Best genome observed over the whole run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BestSolution {
    pub genome: Genome,
    pub variables: Vec<f64>,
    pub objective: f64,
    pub fitness: f64,
    /// Generation in which the genome was first evaluated.
    pub generation: usize,
}

impl BestSolution {
    pub fn bit_string(&self) -> String {
        to_bit_string(&self.genome)
    }
}

/// Best-ever record. Starts empty, which behaves like objective `+inf`.
#[derive(Clone, Debug, Default)]
pub struct BestTracker {
    best: Option<BestSolution>,
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&BestSolution> {
        self.best.as_ref()
    }

    pub fn fitness(&self) -> f64 {
        self.best.as_ref().map_or(f64::NEG_INFINITY, |b| b.fitness)
    }

    pub fn objective(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.objective)
    }

    /// Replaces the record only on strictly higher fitness, so the earliest of
    /// equally good genomes is kept.
    pub fn try_update(&mut self, genome: &[bool], evaluation: &Evaluation, generation: usize) -> bool {
        let Some(objective) = evaluation.objective else {
            return false;
        };
        if evaluation.fitness <= self.fitness() {
            return false;
        }

        self.best = Some(BestSolution {
            genome: genome.to_vec(),
            variables: evaluation.variables.clone(),
            objective,
            fitness: evaluation.fitness,
            generation,
        });
        true
    }

    pub fn clear(&mut self) {
        self.best = None;
    }
}

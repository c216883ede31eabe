use crate::config::ProblemConfig;
use crate::engines::evaluation::{evaluate_guarded, Objective};
use crate::engines::generation::codec::decode_variables;

/// Result of scoring one genome.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub variables: Vec<f64>,
    /// `None` when the objective is undefined at `variables`.
    pub objective: Option<f64>,
    pub fitness: f64,
}

/// Maximization-oriented fitness: the negated objective, or negative
/// infinity where the objective is undefined.
pub fn fitness_from_objective(objective: Option<f64>) -> f64 {
    match objective {
        Some(value) => -value,
        None => f64::NEG_INFINITY,
    }
}

pub fn evaluate_genome<O: Objective + ?Sized>(
    genome: &[bool],
    problem: &ProblemConfig,
    objective: &O,
) -> Evaluation {
    let variables = decode_variables(genome, problem.bits_per_variable as usize, &problem.bounds);
    let value = evaluate_guarded(objective, &variables);

    Evaluation {
        fitness: fitness_from_objective(value),
        objective: value,
        variables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariableBounds;

    fn problem(bits: u32) -> ProblemConfig {
        ProblemConfig {
            bits_per_variable: bits,
            bounds: vec![VariableBounds::new(-10.0, 10.0); 2],
            ..Default::default()
        }
    }

    #[test]
    fn test_fitness_negates_objective() {
        assert_eq!(fitness_from_objective(Some(2.5)), -2.5);
        assert_eq!(fitness_from_objective(Some(-1.0)), 1.0);
        assert_eq!(fitness_from_objective(None), f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluate_genome_decodes_before_scoring() {
        let sum = |x: &[f64]| Some(x[0] + x[1]);
        let mut genome = vec![false; 4];
        genome.extend([true; 4]);

        let evaluation = evaluate_genome(&genome, &problem(4), &sum);
        assert_eq!(evaluation.variables, vec![-10.0, 10.0]);
        assert_eq!(evaluation.objective, Some(0.0));
        assert_eq!(evaluation.fitness, -0.0);
    }

    #[test]
    fn test_undefined_objective_gets_worst_fitness() {
        let undefined = |_: &[f64]| -> Option<f64> { None };
        let evaluation = evaluate_genome(&[true; 8], &problem(4), &undefined);

        assert_eq!(evaluation.objective, None);
        assert_eq!(evaluation.fitness, f64::NEG_INFINITY);
    }
}

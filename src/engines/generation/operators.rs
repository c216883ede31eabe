use crate::config::TournamentSampling;
use crate::engines::generation::genome::Genome;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: index of the fittest of `tournament_size` random candidates.
///
/// Candidates are compared in draw order with a strict `>`, so among equally
/// fit candidates the first one drawn wins.
///
/// `tournament_size` must lie in `1..=fitness.len()`; it is never adjusted.
pub fn tournament_index<R: Rng>(
    fitness: &[f64],
    tournament_size: usize,
    sampling: TournamentSampling,
    rng: &mut R,
) -> usize {
    debug_assert!(
        (1..=fitness.len()).contains(&tournament_size),
        "tournament size {} outside 1..={}",
        tournament_size,
        fitness.len()
    );

    let candidates: Vec<usize> = match sampling {
        TournamentSampling::WithoutReplacement => {
            index::sample(rng, fitness.len(), tournament_size).into_vec()
        }
        TournamentSampling::WithReplacement => (0..tournament_size)
            .map(|_| rng.gen_range(0..fitness.len()))
            .collect(),
    };

    let mut best_idx = candidates[0];
    let mut best_fitness = fitness[best_idx];

    for &idx in &candidates[1..] {
        if fitness[idx] > best_fitness {
            best_idx = idx;
            best_fitness = fitness[idx];
        }
    }

    best_idx
}

/// Tournament selection over a population and its aligned fitness record.
pub fn tournament_selection<'a, R: Rng>(
    population: &'a [Genome],
    fitness: &[f64],
    tournament_size: usize,
    sampling: TournamentSampling,
    rng: &mut R,
) -> &'a Genome {
    &population[tournament_index(fitness, tournament_size, sampling, rng)]
}

/// Single-point crossover, applied with probability `crossover_rate`.
///
/// The cut point is drawn from `1..len` so both children carry material from
/// both parents. Without crossover the children are copies of the parents.
pub fn crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    crossover_rate: f64,
    rng: &mut R,
) -> (Genome, Genome) {
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    if rng.gen::<f64>() >= crossover_rate {
        return (child1, child2);
    }

    let len = parent1.len().min(parent2.len());
    if len <= 1 {
        return (child1, child2);
    }

    let point = rng.gen_range(1..len);

    child1[point..len].copy_from_slice(&parent2[point..len]);
    child2[point..len].copy_from_slice(&parent1[point..len]);

    (child1, child2)
}

/// Bit-flip mutation: each bit flips independently with probability `mutation_rate`.
pub fn mutate<R: Rng>(genome: &mut [bool], mutation_rate: f64, rng: &mut R) {
    for bit in genome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *bit = !*bit;
        }
    }
}

/// Generate random genome, each bit set with probability one half
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen_bool(0.5)).collect()
}

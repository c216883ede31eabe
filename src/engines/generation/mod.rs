pub mod best_solution;
pub mod codec;
pub mod evolution_engine;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod progress;

pub use best_solution::{BestSolution, BestTracker};
pub use codec::{decode, decode_variables, ordinal};
pub use evolution_engine::{
    EvolutionEngine, EvolutionOutcome, GenerationStats, ProgressCallback, Termination,
};
pub use fitness::{evaluate_genome, fitness_from_objective, Evaluation};
pub use genome::Genome;
pub use operators::{crossover, mutate, random_genome, tournament_index, tournament_selection};
pub use progress::{ChannelProgressCallback, LoggingProgressCallback, ProgressMessage};

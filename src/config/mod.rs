pub mod traits;
pub mod evolution;
pub mod problem;
pub mod reporting;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::{EvolutionConfig, TournamentSampling};
pub use problem::{ProblemConfig, VariableBounds};
pub use reporting::ReportingConfig;
pub use traits::ConfigSection;

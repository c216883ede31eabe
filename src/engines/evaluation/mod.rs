pub mod functions;
pub mod objective;

pub use functions::{rastrigin, sphere, trigonometric, BuiltinObjective};
pub use objective::{evaluate_guarded, Objective};

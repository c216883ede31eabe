use std::panic::{catch_unwind, AssertUnwindSafe};

/// A function to be minimized over decoded variables.
///
/// Returning `None` marks the point as undefined (a singularity, a domain
/// error, ...). The engine also treats NaN and infinite results as undefined.
///
/// Objectives are evaluated from rayon worker threads, hence the `Sync` bound.
///
/// Any closure `Fn(&[f64]) -> Option<f64> + Sync` is an objective:
///
/// ```
/// use bitga::Objective;
///
/// let paraboloid = |x: &[f64]| Some(x.iter().map(|v| v * v).sum::<f64>());
/// assert_eq!(paraboloid.evaluate(&[1.0, 2.0]), Some(5.0));
/// ```
pub trait Objective: Sync {
    fn evaluate(&self, variables: &[f64]) -> Option<f64>;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> Option<f64> + Sync,
{
    fn evaluate(&self, variables: &[f64]) -> Option<f64> {
        self(variables)
    }
}

/// Calls the objective without letting a panic or a non-finite value escape.
///
/// The panic itself is contained, but the process-wide panic hook still runs
/// first, so the default hook prints a message to stderr for every panicking
/// point. Callers whose objective panics routinely should install a quieter
/// hook around the run:
///
/// ```
/// use bitga::engines::evaluation::evaluate_guarded;
///
/// let fragile = |x: &[f64]| -> Option<f64> {
///     assert!(x[0] >= 0.0, "negative input");
///     Some(x[0].sqrt())
/// };
///
/// let previous = std::panic::take_hook();
/// std::panic::set_hook(Box::new(|info| log::debug!("contained panic: {}", info)));
/// let value = evaluate_guarded(&fragile, &[-4.0]);
/// std::panic::set_hook(previous);
///
/// assert_eq!(value, None);
/// assert_eq!(evaluate_guarded(&fragile, &[4.0]), Some(2.0));
/// ```
pub fn evaluate_guarded<O: Objective + ?Sized>(objective: &O, variables: &[f64]) -> Option<f64> {
    match catch_unwind(AssertUnwindSafe(|| objective.evaluate(variables))) {
        Ok(Some(value)) if value.is_finite() => Some(value),
        Ok(_) => None,
        Err(_) => {
            log::warn!(
                "Objective '{}' panicked at {:?}; treating the point as undefined",
                objective.name(),
                variables
            );
            None
        }
    }
}

use super::objective::Objective;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Objectives selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinObjective {
    /// `-(sin x1 * cos x2 * tan(x1 + x2) + 0.75 * exp(1 - |x1|))`
    #[default]
    Trigonometric,
    Sphere,
    Rastrigin,
}

impl BuiltinObjective {
    /// Number of variables the function requires, if fixed.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Trigonometric => Some(2),
            Self::Sphere | Self::Rastrigin => None,
        }
    }
}

impl Objective for BuiltinObjective {
    fn evaluate(&self, variables: &[f64]) -> Option<f64> {
        match self {
            Self::Trigonometric => match variables {
                [x1, x2] => trigonometric(*x1, *x2),
                _ => None,
            },
            Self::Sphere => Some(sphere(variables)),
            Self::Rastrigin => Some(rastrigin(variables)),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Trigonometric => "trigonometric",
            Self::Sphere => "sphere",
            Self::Rastrigin => "rastrigin",
        }
    }
}

/// Undefined where `tan(x1 + x2)` has a pole.
pub fn trigonometric(x1: f64, x2: f64) -> Option<f64> {
    let angle = x1 + x2;
    if angle.cos().abs() < f64::EPSILON {
        return None;
    }
    let value = -(x1.sin() * x2.cos() * angle.tan() + 0.75 * (1.0 - x1.abs()).exp());
    value.is_finite().then_some(value)
}

/// Global minimum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Highly multimodal; global minimum 0 at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x
            .iter()
            .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
            .sum::<f64>()
}

//! Fixed-point decoding of bit segments into bounded reals.

use crate::config::VariableBounds;

/// Big-endian unsigned value of `bits`. Segments longer than 64 bits keep
/// only their trailing 64 bits.
pub fn ordinal(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Largest ordinal representable with `len` bits, `2^len - 1`.
pub fn max_ordinal(len: usize) -> u64 {
    match len {
        0 => 0,
        1..=63 => (1u64 << len) - 1,
        _ => u64::MAX,
    }
}

/// Maps `bits` linearly onto `[min, max]`: all zeros give `min`, all ones give `max`.
pub fn decode(bits: &[bool], min: f64, max: f64) -> f64 {
    let max_int = max_ordinal(bits.len());
    if max_int == 0 {
        return min;
    }
    min + (max - min) * (ordinal(bits) as f64 / max_int as f64)
}

/// Distance between the decoded values of adjacent ordinals.
pub fn quantization_step(bits: usize, min: f64, max: f64) -> f64 {
    (max - min) / max_ordinal(bits) as f64
}

/// Decodes one value per bound from consecutive `bits_per_variable` segments.
pub fn decode_variables(
    genome: &[bool],
    bits_per_variable: usize,
    bounds: &[VariableBounds],
) -> Vec<f64> {
    genome
        .chunks(bits_per_variable)
        .zip(bounds)
        .map(|(segment, bound)| decode(segment, bound.min, bound.max))
        .collect()
}

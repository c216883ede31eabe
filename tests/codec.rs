use bitga::engines::generation::codec::{decode, max_ordinal, ordinal, quantization_step};
use proptest::prelude::*;

fn bits_of(value: u64, len: usize) -> Vec<bool> {
    (0..len).rev().map(|i| (value >> i) & 1 == 1).collect()
}

#[test]
fn test_sixteen_bit_reference_points() {
    assert_eq!(decode(&[false; 16], -10.0, 10.0), -10.0);
    assert_eq!(decode(&[true; 16], -10.0, 10.0), 10.0);

    // 32768 / 65535 sits half a step above the midpoint
    let x = decode(&bits_of(32768, 16), -10.0, 10.0);
    assert!((x - 10.0 / 65535.0).abs() < 1e-12);
    assert!((x - 0.000152590).abs() < 1e-8);
}

#[test]
fn test_sixteen_bit_step() {
    let step = quantization_step(16, -10.0, 10.0);
    assert!((step - 20.0 / 65535.0).abs() < 1e-15);
    assert!((step - 0.000305).abs() < 1e-6);
}

proptest! {
    #[test]
    fn endpoints_decode_to_bounds(len in 1usize..=64, min in -1e6f64..1e6, width in 1e-3f64..1e6) {
        let max = min + width;
        let tolerance = 1e-9 * (min.abs() + max.abs() + 1.0);

        prop_assert_eq!(decode(&vec![false; len], min, max), min);
        prop_assert!((decode(&vec![true; len], min, max) - max).abs() <= tolerance);
    }

    #[test]
    fn decode_is_monotone(len in 1usize..=24, a in any::<u64>(), b in any::<u64>()) {
        let mask = max_ordinal(len);
        let (lo, hi) = if a & mask <= b & mask { (a & mask, b & mask) } else { (b & mask, a & mask) };

        prop_assert!(decode(&bits_of(lo, len), -3.0, 7.0) <= decode(&bits_of(hi, len), -3.0, 7.0));
    }

    #[test]
    fn adjacent_ordinals_are_one_step_apart(len in 1usize..=32, v in any::<u64>()) {
        let max = max_ordinal(len);
        prop_assume!(max > 0);
        let v = v % max;

        let step = quantization_step(len, -10.0, 10.0);
        let lower = decode(&bits_of(v, len), -10.0, 10.0);
        let upper = decode(&bits_of(v + 1, len), -10.0, 10.0);

        prop_assert!((upper - lower - step).abs() < 1e-9);
    }

    #[test]
    fn ordinal_reads_big_endian(len in 1usize..=64, v in any::<u64>()) {
        let v = v & max_ordinal(len);
        prop_assert_eq!(ordinal(&bits_of(v, len)), v);
    }
}

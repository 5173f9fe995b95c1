//! Shared input generation for dialscope benchmarks.
//!
//! Inputs are generated from a seeded RNG so runs are comparable across
//! machines and commits.

use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng as _, SeedableRng as _};

/// Generates `count` well-formed ten-digit numbers with a dialable leading
/// digit, deterministically from `seed`.
pub fn sample_numbers(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let lead = rng.gen_range(1..=9u8);
            let mut s = String::with_capacity(10);
            s.push((b'0' + lead) as char);
            for _ in 0..9 {
                s.push((b'0' + rng.gen_range(0..=9u8)) as char);
            }
            s
        })
        .collect()
}

/// Generates `count` raw inputs in mixed spellings (international prefix,
/// trunk zero, separators), deterministically from `seed`.
pub fn sample_raw_inputs(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let numbers = sample_numbers(count, seed.wrapping_add(1));
    numbers
        .into_iter()
        .map(|n| {
            let styles: [fn(&str) -> String; 4] = [
                |n| format!("+91{n}"),
                |n| format!("0{n}"),
                |n| format!("{} {}", &n[..5], &n[5..]),
                |n| n.to_owned(),
            ];
            let style = styles.choose(&mut rng).copied().unwrap_or(|n| n.to_owned());
            style(&n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_numbers_are_well_formed() {
        for n in sample_numbers(100, 42) {
            assert_eq!(n.len(), 10);
            assert!(!n.starts_with('0'));
            assert!(n.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(sample_numbers(10, 7), sample_numbers(10, 7));
        assert_eq!(sample_raw_inputs(10, 7), sample_raw_inputs(10, 7));
    }
}

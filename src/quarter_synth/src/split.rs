use rand::Rng;
use rand_distr::{Dirichlet, Distribution};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{Result, SynthError};

/// How the remainder left after flooring is handed back to the parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMethod {
    /// +1 to the first `diff` parts in index order
    #[default]
    FloorFill,
    /// +1 to the parts with the largest fractional remainders (ties by index)
    LargestRemainder,
}

impl FromStr for SplitMethod {
    type Err = SynthError;

    /// Parse the snake_case name used in configs.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "floor_fill" => Ok(SplitMethod::FloorFill),
            "largest_remainder" => Ok(SplitMethod::LargestRemainder),
            other => Err(SynthError::UnknownSplitMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Draw `n` proportions uniformly from the (n-1)-simplex.
///
/// Symmetric Dirichlet with every concentration parameter equal to 1.
pub fn proportions<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<f64>> {
    match n {
        0 => Err(SynthError::InvalidPartCount { parts: 0 }),
        1 => Ok(vec![1.0]),
        _ => {
            let dirichlet = Dirichlet::new_with_size(1.0_f64, n)
                .map_err(|_| SynthError::InvalidPartCount { parts: n })?;
            Ok(dirichlet.sample(rng))
        }
    }
}

/// Split a non-negative integer total into `n` non-negative parts summing
/// exactly to `value`.
///
/// A zero total returns `n` zeros without touching `rng`.
///
/// # Arguments
/// * `value` - Total to split (already rounded by the caller)
/// * `n` - Number of parts, at least 1
/// * `method` - Remainder policy after flooring
/// * `rng` - Randomness source for the proportions
pub fn split_total<R: Rng + ?Sized>(
    value: u32,
    n: usize,
    method: SplitMethod,
    rng: &mut R,
) -> Result<Vec<u32>> {
    if n == 0 {
        return Err(SynthError::InvalidPartCount { parts: n });
    }
    if value == 0 {
        return Ok(vec![0; n]);
    }

    let weights = proportions(n, rng)?;
    Ok(apportion(value, &weights, method))
}

/// Scale `weights` by `value`, floor each share and fix up the remainder so
/// the parts sum to `value`.
///
/// Weights are expected to be non-negative and sum to ~1.
pub fn apportion(value: u32, weights: &[f64], method: SplitMethod) -> Vec<u32> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }

    let total = value as f64;
    let scaled: Vec<f64> = weights.iter().map(|w| w * total).collect();
    let mut parts: Vec<u32> = scaled
        .iter()
        .map(|share| share.floor().clamp(0.0, total) as u32)
        .collect();

    let allocated: u64 = parts.iter().map(|&p| p as u64).sum();
    let target = value as u64;

    if allocated > target {
        // Weights summing a hair over 1 can overshoot; give units back from the end.
        let mut excess = allocated - target;
        for part in parts.iter_mut().rev() {
            let take = excess.min(*part as u64);
            *part -= take as u32;
            excess -= take;
            if excess == 0 {
                break;
            }
        }
        return parts;
    }

    let diff = (target - allocated) as usize;
    let order: Vec<usize> = match method {
        SplitMethod::FloorFill => (0..n).collect(),
        SplitMethod::LargestRemainder => {
            let remainders: Vec<f64> = scaled.iter().map(|s| s - s.floor()).collect();
            let mut order: Vec<usize> = (0..n).collect();
            // Stable sort keeps index order among equal remainders
            order.sort_by(|&a, &b| {
                remainders[b]
                    .partial_cmp(&remainders[a])
                    .unwrap_or(Ordering::Equal)
            });
            order
        }
    };

    for &i in order.iter().cycle().take(diff) {
        parts[i] += 1;
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_total_returns_zeros() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let parts = split_total(0, 4, SplitMethod::FloorFill, &mut rng).unwrap();
        assert_eq!(parts, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_total_consumes_no_randomness() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut untouched = rng.clone();

        split_total(0, 4, SplitMethod::FloorFill, &mut rng).unwrap();
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_sum_preserved() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for value in [1, 2, 3, 7, 40, 99, 1000, 123_457] {
            for n in 1..=6 {
                let parts = split_total(value, n, SplitMethod::FloorFill, &mut rng).unwrap();
                assert_eq!(parts.len(), n);
                assert_eq!(parts.iter().sum::<u32>(), value);
                assert!(parts.iter().all(|&p| p <= value));
            }
        }
    }

    #[test]
    fn test_single_part_gets_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let parts = split_total(17, 1, SplitMethod::LargestRemainder, &mut rng).unwrap();
        assert_eq!(parts, vec![17]);
    }

    #[test]
    fn test_zero_parts_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = split_total(5, 0, SplitMethod::FloorFill, &mut rng).unwrap_err();
        assert!(matches!(err, SynthError::InvalidPartCount { parts: 0 }));
    }

    #[test]
    fn test_same_seed_same_split() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(99);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99);

        let a = split_total(57, 4, SplitMethod::FloorFill, &mut rng1).unwrap();
        let b = split_total(57, 4, SplitMethod::FloorFill, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = proportions(4, &mut rng).unwrap();
        assert_eq!(p.len(), 4);
        assert!(p.iter().all(|&x| x >= 0.0));
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_split_method() {
        assert_eq!("floor_fill".parse::<SplitMethod>().unwrap(), SplitMethod::FloorFill);
        assert_eq!(
            "largest_remainder".parse::<SplitMethod>().unwrap(),
            SplitMethod::LargestRemainder
        );

        let err = "round_robin".parse::<SplitMethod>().unwrap_err();
        assert!(matches!(err, SynthError::UnknownSplitMethod { ref name } if name == "round_robin"));
    }

    #[test]
    fn test_floor_fill_uses_index_order() {
        // 1.4, 3.6, 5.0 -> floors 1, 3, 5 with one unit left over
        let parts = apportion(10, &[0.14, 0.36, 0.5], SplitMethod::FloorFill);
        assert_eq!(parts, vec![2, 3, 5]);
    }

    #[test]
    fn test_largest_remainder_picks_biggest_fraction() {
        let parts = apportion(10, &[0.14, 0.36, 0.5], SplitMethod::LargestRemainder);
        assert_eq!(parts, vec![1, 4, 5]);
    }

    #[test]
    fn test_equal_remainders_break_ties_by_index() {
        let weights = [0.25; 4];
        assert_eq!(apportion(10, &weights, SplitMethod::FloorFill), vec![3, 3, 2, 2]);
        assert_eq!(
            apportion(10, &weights, SplitMethod::LargestRemainder),
            vec![3, 3, 2, 2]
        );
    }

    #[test]
    fn test_overshooting_weights_still_sum_exactly() {
        let parts = apportion(10, &[0.6, 0.6], SplitMethod::FloorFill);
        assert_eq!(parts.iter().sum::<u32>(), 10);
    }
}

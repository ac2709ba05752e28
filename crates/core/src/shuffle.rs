//! Uniform shuffling and sampling without replacement.
//!
//! Every function takes the random source explicitly, so callers can pass a
//! seeded `StdRng` for reproducible draws.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SampleError {
    #[error("requested {requested} elements but only {available} are available")]
    InsufficientElements { requested: usize, available: usize },
}

/// Fisher–Yates shuffle: for `i` from `len - 1` down to `1`, swap `i` with a
/// uniformly drawn `j` in `0..=i`.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is left untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

/// `k` distinct elements of `items` in random order.
///
/// # Errors
///
/// Returns `SampleError::InsufficientElements` when `k > items.len()`.
pub fn sample<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>, SampleError> {
    if k > items.len() {
        return Err(SampleError::InsufficientElements {
            requested: k,
            available: items.len(),
        });
    }
    let mut drawn = shuffled(items, rng);
    drawn.truncate(k);
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();
        let mut output = shuffled(&input, &mut rng);
        assert_eq!(output.len(), input.len());
        output.sort_unstable();
        assert_eq!(output, input);
    }

    #[test]
    fn shuffled_leaves_input_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!["a", "b", "c", "d"];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffled(&input, &mut StdRng::seed_from_u64(42));
        let b = shuffled(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = Vec::new();
        shuffle_in_place(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle_in_place(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn sample_returns_k_distinct_members() {
        let mut rng = StdRng::seed_from_u64(11);
        let input: Vec<u32> = (0..20).collect();
        let picked = sample(&input, 10, &mut rng).unwrap();
        assert_eq!(picked.len(), 10);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(picked.iter().all(|v| input.contains(v)));
    }

    #[test]
    fn sample_of_everything_is_a_full_shuffle() {
        let mut rng = StdRng::seed_from_u64(5);
        let input: Vec<u32> = (0..20).collect();
        let mut picked = sample(&input, 20, &mut rng).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, input);
    }

    #[test]
    fn sample_more_than_available_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = sample(&[1, 2, 3], 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SampleError::InsufficientElements {
                requested: 4,
                available: 3
            }
        );
    }

    #[test]
    fn positions_are_close_to_uniform() {
        // 4 elements, 4000 shuffles: each element should land in each slot ~1000 times.
        let mut rng = StdRng::seed_from_u64(2024);
        let input = [0_usize, 1, 2, 3];
        let mut counts = [[0_u32; 4]; 4];
        for _ in 0..4000 {
            let out = shuffled(&input, &mut rng);
            for (slot, value) in out.iter().enumerate() {
                counts[*value][slot] += 1;
            }
        }
        for row in counts {
            for count in row {
                assert!((850..=1150).contains(&count), "skewed count {count}");
            }
        }
    }

    #[test]
    fn sample_distribution_covers_every_element() {
        let mut rng = StdRng::seed_from_u64(99);
        let input: Vec<usize> = (0..10).collect();
        let mut hits = [0_u32; 10];
        for _ in 0..1000 {
            for v in sample(&input, 3, &mut rng).unwrap() {
                hits[v] += 1;
            }
        }
        // expected 300 each
        for count in hits {
            assert!((220..=380).contains(&count), "skewed count {count}");
        }
    }
}

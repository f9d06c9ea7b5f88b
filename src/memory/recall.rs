//! Synchronous recall procedure
//!
//! Starting from a probe vector, each pass computes the full activation
//! `h = W * s` from the previous state, applies the sign rule (with zero
//! resolving to -1), and swaps the new vector in wholesale. After every pass
//! the current vector is checked for exact membership in the pattern store;
//! a match is returned immediately. The loop is bounded: a vector that never
//! matches a stored pattern fails with
//! [`NotConverged`](crate::MemoryError::NotConverged), whether it oscillates
//! or settles on a spurious attractor.

use crate::error::{MemoryError, Result};
use crate::memory::store::PatternStore;
use crate::memory::weights::WeightMatrix;
use crate::pattern::Pattern;

/// Maximum number of synchronous update passes per recall
pub const MAX_PASSES: usize = 10_000;

/// A successful recall: the matched stored pattern and the pass count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recalled {
    /// The stored pattern the probe converged to
    pub pattern: Pattern,
    /// Number of update passes taken (1-based)
    pub passes: usize,
}

/// Relax a probe vector against the weight matrix until it matches a stored
/// pattern, or fail with a typed error.
///
/// Purely functional over its inputs. Fails with
/// [`MemoryError::EmptyStore`] before the loop ever runs if no patterns are
/// stored, and with [`MemoryError::InvalidLength`] on a probe of the wrong
/// dimension.
pub fn recall(
    probe: &Pattern,
    weights: &WeightMatrix,
    store: &PatternStore,
) -> Result<Recalled> {
    if store.is_empty() {
        return Err(MemoryError::EmptyStore);
    }
    if probe.len() != store.dimension() {
        return Err(MemoryError::InvalidLength {
            expected: store.dimension(),
            actual: probe.len(),
        });
    }

    let mut state = probe.clone();
    for pass in 1..=MAX_PASSES {
        let h = weights.activation(&state);
        // sign activation; an activation of exactly 0 resolves to -1
        let next = Pattern::from_raw(h.iter().map(|&x| if x > 0.0 { 1 } else { -1 }).collect());

        if store.contains(&next) {
            return Ok(Recalled {
                pattern: next,
                passes: pass,
            });
        }
        if next == state {
            // stable fixed point outside the store; further passes cannot
            // change the outcome
            log::debug!("recall settled on a spurious attractor after {pass} passes");
            return Err(MemoryError::NotConverged { passes: pass });
        }
        state = next;
    }

    log::debug!("recall exhausted {MAX_PASSES} passes without a match");
    Err(MemoryError::NotConverged { passes: MAX_PASSES })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(bits: &[u8]) -> Pattern {
        Pattern::from_bits(bits).unwrap()
    }

    fn store_with(dimension: usize, patterns: &[&[u8]]) -> (PatternStore, WeightMatrix) {
        let mut store = PatternStore::new(dimension);
        for bits in patterns {
            store.add(pattern(bits)).unwrap();
        }
        let weights = WeightMatrix::rebuild(&store);
        (store, weights)
    }

    #[test]
    fn test_single_pattern_self_recall_in_one_pass() {
        let p = pattern(&[1, 0, 1, 1, 0, 0, 1, 0, 1, 1]);
        let (store, weights) = store_with(10, &[&[1, 0, 1, 1, 0, 0, 1, 0, 1, 1]]);

        let recalled = recall(&p, &weights, &store).unwrap();
        assert_eq!(recalled.pattern, p);
        assert_eq!(recalled.passes, 1);
    }

    #[test]
    fn test_orthogonal_pair_self_recall() {
        // A and B agree on exactly 5 of 10 positions, so <A, B> = 0
        let a: &[u8] = &[1, 1, 1, 1, 1, 0, 0, 0, 0, 0];
        let b: &[u8] = &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        let (store, weights) = store_with(10, &[a, b]);

        for bits in [a, b] {
            let recalled = recall(&pattern(bits), &weights, &store).unwrap();
            assert_eq!(recalled.pattern, pattern(bits));
            assert_eq!(recalled.passes, 1);
        }
    }

    #[test]
    fn test_one_bit_corruption_recovers() {
        let a: &[u8] = &[1, 1, 1, 1, 1, 0, 0, 0, 0, 0];
        let b: &[u8] = &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        let (store, weights) = store_with(10, &[a, b]);

        for flip in 0..10 {
            let mut corrupted = a.to_vec();
            corrupted[flip] ^= 1;
            let recalled = recall(&pattern(&corrupted), &weights, &store).unwrap();
            assert_eq!(recalled.pattern, pattern(a));
            assert!(recalled.passes <= 5);
        }
    }

    #[test]
    fn test_empty_store_fails_before_iterating() {
        let store = PatternStore::new(3);
        let weights = WeightMatrix::zeros(3);
        assert_eq!(
            recall(&pattern(&[1, 0, 1]), &weights, &store),
            Err(MemoryError::EmptyStore)
        );
    }

    #[test]
    fn test_probe_length_mismatch() {
        let (store, weights) = store_with(4, &[&[1, 0, 1, 0]]);
        assert_eq!(
            recall(&pattern(&[1, 0]), &weights, &store),
            Err(MemoryError::InvalidLength {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_zero_activation_resolves_to_minus_one() {
        // storing [+1,+1] and [+1,-1] cancels every off-diagonal weight, so
        // every activation is exactly 0 and the tie-break drives the state
        // to all -1, which is not stored
        let (store, weights) = store_with(2, &[&[1, 1], &[1, 0]]);
        assert_eq!(weights.get(0, 1), 0.0);

        let err = recall(&pattern(&[1, 1]), &weights, &store).unwrap_err();
        // pass 1 moves to [-1,-1]; pass 2 detects the unstored fixed point
        assert_eq!(err, MemoryError::NotConverged { passes: 2 });
    }

    #[test]
    fn test_zero_activation_matches_stored_all_minus() {
        // same degenerate matrix, but the all-minus vector is stored, so the
        // tie-break lands on a stored pattern
        let (store, weights) = store_with(2, &[&[0, 0], &[1, 0]]);
        assert_eq!(weights.get(0, 1), 0.0);

        let recalled = recall(&pattern(&[1, 1]), &weights, &store).unwrap();
        assert_eq!(recalled.pattern, pattern(&[0, 0]));
    }

    #[test]
    fn test_oscillation_exhausts_pass_bound() {
        // single stored pattern [+1,-1] gives w01 = -1, so the probe
        // [+1,+1] flips to [-1,-1] and back every pass: a 2-cycle that
        // never matches and never stabilizes
        let (store, weights) = store_with(2, &[&[1, 0]]);

        let err = recall(&pattern(&[1, 1]), &weights, &store).unwrap_err();
        assert_eq!(err, MemoryError::NotConverged { passes: MAX_PASSES });
    }

    #[test]
    fn test_spurious_fixed_point_reports_not_converged() {
        // single stored pattern: its negation is also a fixed point of the
        // dynamics but is not stored
        let (store, weights) = store_with(4, &[&[1, 1, 0, 0]]);
        let negation = pattern(&[0, 0, 1, 1]);

        let err = recall(&negation, &weights, &store).unwrap_err();
        assert!(matches!(err, MemoryError::NotConverged { .. }));
    }
}

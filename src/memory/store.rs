//! Pattern store with deduplication
//!
//! Holds the learned patterns in insertion order. The dimension is fixed at
//! construction; every stored pattern has exactly that length. No two stored
//! patterns are element-wise identical.

use crate::error::{MemoryError, Result};
use crate::pattern::Pattern;

/// Ordered collection of unique patterns of a fixed dimension
#[derive(Debug, Clone)]
pub struct PatternStore {
    dimension: usize,
    patterns: Vec<Pattern>,
}

impl PatternStore {
    /// Create an empty store for patterns of the given dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            patterns: Vec::new(),
        }
    }

    /// Append a pattern.
    ///
    /// Fails with [`MemoryError::InvalidLength`] on a dimension mismatch and
    /// with [`MemoryError::AlreadyExists`] on an element-wise duplicate.
    /// Both checks run before any mutation, so a failed add leaves the store
    /// unchanged.
    pub fn add(&mut self, pattern: Pattern) -> Result<()> {
        if pattern.len() != self.dimension {
            return Err(MemoryError::InvalidLength {
                expected: self.dimension,
                actual: pattern.len(),
            });
        }
        if self.patterns.contains(&pattern) {
            return Err(MemoryError::AlreadyExists);
        }
        self.patterns.push(pattern);
        Ok(())
    }

    /// Remove all patterns
    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    /// Exact element-wise membership test
    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.patterns.contains(pattern)
    }

    /// Number of stored patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Fixed pattern dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Iterate over the stored patterns in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// The stored patterns as a slice, in insertion order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(bits: &[u8]) -> Pattern {
        Pattern::from_bits(bits).unwrap()
    }

    #[test]
    fn test_add_and_contains() {
        let mut store = PatternStore::new(4);
        let p = pattern(&[1, 0, 1, 0]);
        assert!(!store.contains(&p));

        store.add(p.clone()).unwrap();
        assert!(store.contains(&p));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut store = PatternStore::new(4);
        let p = pattern(&[1, 1, 0, 0]);
        store.add(p.clone()).unwrap();
        assert_eq!(store.add(p), Err(MemoryError::AlreadyExists));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_length_mismatch_rejected_before_mutation() {
        let mut store = PatternStore::new(4);
        assert_eq!(
            store.add(pattern(&[1, 0, 1])),
            Err(MemoryError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut store = PatternStore::new(2);
        let a = pattern(&[1, 1]);
        let b = pattern(&[0, 1]);
        let c = pattern(&[1, 0]);
        store.add(a.clone()).unwrap();
        store.add(b.clone()).unwrap();
        store.add(c.clone()).unwrap();

        let seen: Vec<&Pattern> = store.iter().collect();
        assert_eq!(seen, vec![&a, &b, &c]);
        // restartable
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = PatternStore::new(2);
        store.add(pattern(&[1, 0])).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.dimension(), 2);
    }
}

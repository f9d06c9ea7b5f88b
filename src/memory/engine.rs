//! Associative memory engine facade
//!
//! [`AssociativeMemory`] owns a [`PatternStore`] and the weight matrix
//! derived from it. The matrix is never mutated independently: every change
//! to the store rebuilds it, so it always reflects exactly the current
//! pattern set. Recall borrows the engine immutably, so a caller embedding
//! the engine in a concurrent host gets the single-writer discipline from
//! the borrow rules: no add or clear can interleave with a running recall.

use crate::error::{MemoryError, Result};
use crate::memory::recall::{recall, Recalled};
use crate::memory::store::PatternStore;
use crate::memory::weights::WeightMatrix;
use crate::pattern::Pattern;

/// Discrete Hopfield associative memory over bipolar patterns of a fixed
/// dimension
#[derive(Debug, Clone)]
pub struct AssociativeMemory {
    store: PatternStore,
    weights: WeightMatrix,
}

impl AssociativeMemory {
    /// Create an empty memory for patterns of the given dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            store: PatternStore::new(dimension),
            weights: WeightMatrix::zeros(dimension),
        }
    }

    /// Create a memory from a text dump (see
    /// [`export_patterns_as_text`](Self::export_patterns_as_text)), taking
    /// the dimension from the first block.
    pub fn from_text(text: &str) -> Result<Self> {
        let first = text
            .split("\n\n")
            .map(str::trim)
            .find(|block| !block.is_empty())
            .ok_or_else(|| MemoryError::Parse("no pattern blocks".to_string()))?;
        let dimension = Pattern::from_text_block(first)?.len();

        let mut memory = Self::new(dimension);
        memory.import_patterns_from_text(text)?;
        Ok(memory)
    }

    /// Store a pattern and rebuild the weight matrix.
    ///
    /// A rejected pattern (wrong length or already stored) leaves both the
    /// store and the matrix unchanged.
    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<()> {
        self.store.add(pattern)?;
        self.weights = WeightMatrix::rebuild(&self.store);
        log::debug!(
            "stored pattern {} of dimension {}",
            self.store.len(),
            self.store.dimension()
        );
        Ok(())
    }

    /// Remove every stored pattern and zero the weight matrix
    pub fn clear(&mut self) {
        self.store.clear();
        self.weights = WeightMatrix::zeros(self.store.dimension());
        log::debug!("cleared all stored patterns");
    }

    /// Recover the stored pattern closest to the probe, if the relaxation
    /// reaches one within the pass bound
    pub fn recall(&self, probe: &Pattern) -> Result<Recalled> {
        recall(probe, &self.weights, &self.store)
    }

    /// Dump every stored pattern as text: one block per pattern in insertion
    /// order, blocks separated by a blank line. Within a block, values are
    /// written row-major and wrapped every 10, with '1' for +1 and '0'
    /// for -1.
    pub fn export_patterns_as_text(&self) -> String {
        let blocks: Vec<String> = self.store.iter().map(Pattern::to_text_block).collect();
        let mut out = blocks.join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Parse a text dump and store every block, returning the number of
    /// patterns added.
    ///
    /// Each add is atomic; on the first malformed or duplicate block the
    /// import stops with that error and the blocks added so far remain
    /// stored.
    pub fn import_patterns_from_text(&mut self, text: &str) -> Result<usize> {
        let mut added = 0;
        for block in text.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
            self.add_pattern(Pattern::from_text_block(block)?)?;
            added += 1;
        }
        Ok(added)
    }

    /// Number of stored patterns
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Fixed pattern dimension N
    pub fn dimension(&self) -> usize {
        self.store.dimension()
    }

    /// The stored patterns, in insertion order
    pub fn patterns(&self) -> &[Pattern] {
        self.store.patterns()
    }

    /// The current weight matrix
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }
}

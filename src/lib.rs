//! # Hopfield Memory
//!
//! A discrete Hopfield associative memory: stores a set of unique bipolar
//! patterns inside a symmetric, zero-diagonal Hebbian weight matrix and
//! recovers the closest stored pattern from a noisy or partial probe by
//! bounded synchronous relaxation.
//!
//! ## Modules
//!
//! - `pattern`: the bipolar [`Pattern`] type and its text-block codec
//! - `memory`: pattern store, Hebbian weights, recall, and the
//!   [`AssociativeMemory`] facade
//! - `encoding`: deterministic grid <-> pattern bridges for callers
//! - `error`: the typed, recoverable error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield_memory::{AssociativeMemory, Pattern};
//!
//! # fn main() -> hopfield_memory::Result<()> {
//! let mut memory = AssociativeMemory::new(10);
//! memory.add_pattern(Pattern::from_bits(&[1, 1, 1, 1, 1, 0, 0, 0, 0, 0])?)?;
//! memory.add_pattern(Pattern::from_bits(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1])?)?;
//!
//! // probe with the first pattern corrupted in one position
//! let probe = Pattern::from_bits(&[0, 1, 1, 1, 1, 0, 0, 0, 0, 0])?;
//! let recalled = memory.recall(&probe)?;
//! assert_eq!(recalled.pattern.to_bits(), vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0]);
//! # Ok(())
//! # }
//! ```

pub mod encoding;
pub mod error;
pub mod memory;
pub mod pattern;

// Re-export main types for convenience
pub use encoding::GridEncoder;
pub use error::{MemoryError, Result};
pub use memory::engine::AssociativeMemory;
pub use memory::recall::{Recalled, MAX_PASSES};
pub use memory::store::PatternStore;
pub use memory::weights::WeightMatrix;
pub use pattern::Pattern;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::encoding::GridEncoder;
    pub use crate::error::{MemoryError, Result};
    pub use crate::memory::engine::AssociativeMemory;
    pub use crate::memory::recall::Recalled;
    pub use crate::memory::store::PatternStore;
    pub use crate::memory::weights::WeightMatrix;
    pub use crate::pattern::Pattern;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

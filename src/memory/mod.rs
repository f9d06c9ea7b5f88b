//! Associative memory engine
//!
//! Provides:
//! - Pattern store with deduplication
//! - Hebbian weight matrix derived from the stored patterns
//! - Synchronous recall procedure
//! - The [`AssociativeMemory`](engine::AssociativeMemory) facade tying them together

pub mod engine;
pub mod recall;
pub mod store;
pub mod weights;

pub use engine::*;
pub use recall::*;
pub use store::*;
pub use weights::*;

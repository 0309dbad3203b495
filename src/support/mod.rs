//! Lazy and iterative helpers used by grid traversals

/// Endlessly repeating sequences
pub mod cyclic;
/// Single-argument memoization with hit/miss statistics
pub mod memoize;

pub use cyclic::Cyclic;
pub use memoize::{Memoized, memoize};

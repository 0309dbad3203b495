//! Text input, configuration and errors

/// Evaluation mode and crate constants
pub mod configuration;
/// Error types for grid operations
pub mod error;
/// Conversion of puzzle text into matrices and grids
pub mod parse;

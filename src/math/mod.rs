//! Mathematical utilities used alongside grids

/// Triangular numbers, gcd/lcm, products and midpoints
pub mod arithmetic;
/// Bit-string parsing and conversion
pub mod bits;

//! Evaluation mode and crate-wide constants

/// When cell values are computed
///
/// Lazy grids compute a cell's value on first access. Eager grids force every
/// cell once construction has finished, for value constructors whose side
/// effects must happen up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// Compute each value on first access
    #[default]
    Lazy,
    /// Compute every value during construction
    Eager,
}

impl Evaluation {
    /// Check whether construction forces every cell
    pub const fn is_eager(self) -> bool {
        matches!(self, Self::Eager)
    }
}

impl From<bool> for Evaluation {
    fn from(eager: bool) -> Self {
        if eager { Self::Eager } else { Self::Lazy }
    }
}

/// Number of sub-grids placed side by side in each band of a split
pub const PARTS_PER_BAND: usize = 2;

/// Longest bit string that converts to a `u64`
pub const MAX_BIT_STRING_LEN: usize = 64;

/// Radix used when parsing single digits
pub const DIGIT_RADIX: u32 = 10;

//! Tests for evaluation mode selection

#[cfg(test)]
mod tests {
    use lazygrid::Evaluation;
    use lazygrid::io::configuration::{MAX_BIT_STRING_LEN, PARTS_PER_BAND};

    // Grids are lazy unless asked otherwise
    // Verified by defaulting to eager evaluation
    #[test]
    fn test_default_is_lazy() {
        assert_eq!(Evaluation::default(), Evaluation::Lazy);
        assert!(!Evaluation::default().is_eager());
    }

    // A boolean eagerness flag converts to the matching mode
    // Verified by inverting the flag
    #[test]
    fn test_from_flag() {
        assert_eq!(Evaluation::from(true), Evaluation::Eager);
        assert_eq!(Evaluation::from(false), Evaluation::Lazy);
        assert!(Evaluation::Eager.is_eager());
    }

    // Split bands hold two parts and bit strings fit a u64
    // Verified by changing the band width to three
    #[test]
    fn test_constants() {
        assert_eq!(PARTS_PER_BAND, 2);
        assert_eq!(MAX_BIT_STRING_LEN, u64::BITS as usize);
    }
}

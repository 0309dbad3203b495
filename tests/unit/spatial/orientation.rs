//! Tests for the reorientation applied before reducing lines

#[cfg(test)]
mod tests {
    use lazygrid::spatial::CardinalDirection;
    use lazygrid::spatial::orientation::Orientation;
    use ndarray::{Array2, array};

    fn reoriented(direction: CardinalDirection) -> Array2<i32> {
        let matrix = array![[1, 2, 3], [4, 5, 6]];
        Orientation::for_direction(direction)
            .apply(matrix.view())
            .to_owned()
    }

    // Scanning west keeps the matrix as it is
    // Verified by reversing rows for west
    #[test]
    fn test_west_is_identity() {
        assert_eq!(reoriented(CardinalDirection::West), array![[1, 2, 3], [4, 5, 6]]);
    }

    // Scanning east reverses each row
    // Verified by reversing the row order instead
    #[test]
    fn test_east_reverses_rows() {
        assert_eq!(reoriented(CardinalDirection::East), array![[3, 2, 1], [6, 5, 4]]);
    }

    // Scanning north turns columns into rows
    // Verified by transposing after reversing
    #[test]
    fn test_north_transposes() {
        assert_eq!(
            reoriented(CardinalDirection::North),
            array![[1, 4], [2, 5], [3, 6]]
        );
    }

    // Scanning south turns columns into rows read bottom to top
    // Verified by skipping the row reversal for south
    #[test]
    fn test_south_transposes_and_reverses() {
        assert_eq!(
            reoriented(CardinalDirection::South),
            array![[4, 1], [5, 2], [6, 3]]
        );
    }

    // Only the vertical scans swap axes
    // Verified by transposing for east
    #[test]
    fn test_transpose_flags() {
        for direction in CardinalDirection::ALL {
            let orientation = Orientation::for_direction(direction);
            let vertical = matches!(
                direction,
                CardinalDirection::North | CardinalDirection::South
            );
            assert_eq!(orientation.transpose, vertical);
        }
    }
}

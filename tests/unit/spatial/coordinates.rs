//! Tests for coordinate arithmetic, direction classification and path decomposition

#[cfg(test)]
mod tests {
    use lazygrid::spatial::{Coordinates, Direction};

    // Manhattan distance sums both deltas, Chebyshev takes the larger
    // Verified by summing the deltas for the diagonal metric
    #[test]
    fn test_distance_metrics() {
        let a = Coordinates::new(1, 2);
        let b = Coordinates::new(4, -2);

        assert_eq!(a.distance_to(b, false), 7);
        assert_eq!(a.distance_to(b, true), 4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.chebyshev_distance(b), 4);
        assert_eq!(a.distance_to(a, false), 0);
    }

    // Opposite corners of the i32 plane measure and classify without overflow
    // Verified by summing the deltas in u32 and subtracting in i32
    #[test]
    fn test_extreme_coordinates() {
        let low = Coordinates::new(i32::MIN, i32::MIN);
        let high = Coordinates::new(i32::MAX, i32::MAX);
        let span = u64::from(u32::MAX);

        assert_eq!(low.distance_to(high, false), 2 * span);
        assert_eq!(low.distance_to(high, true), span);
        assert_eq!(high.manhattan_distance(low), 2 * span);
        assert_eq!(low.direction_to(high), Some(Direction::SouthEast));
        assert_eq!(high.direction_to(low), Some(Direction::NorthWest));
        assert_eq!(
            Coordinates::new(i32::MAX, 0).direction_to(Coordinates::new(i32::MIN, 0)),
            Some(Direction::West)
        );
        assert_eq!(
            Coordinates::new(0, i32::MIN).direction_to(Coordinates::new(1, i32::MAX)),
            None
        );
    }

    // Paths near the edges of the i32 range decompose normally
    // Verified by computing the displacement in i32
    #[test]
    fn test_path_across_extremes() {
        let start = Coordinates::new(i32::MAX - 1, i32::MIN);
        let target = Coordinates::new(i32::MAX, i32::MIN + 2);

        let path = start.path_to(target);
        assert_eq!(path, vec![Direction::East, Direction::South, Direction::South]);
        assert_eq!(start.walk(path), target);
    }

    // Moving north decreases the row and diagonals move along both axes
    // Verified by flipping the sign of the north offset
    #[test]
    fn test_in_direction() {
        let origin = Coordinates::new(5, 5);

        assert_eq!(origin.in_direction(Direction::North, 1), Coordinates::new(5, 4));
        assert_eq!(origin.in_direction(Direction::South, 2), Coordinates::new(5, 7));
        assert_eq!(origin.in_direction(Direction::East, 3), Coordinates::new(8, 5));
        assert_eq!(origin.in_direction(Direction::West, 1), Coordinates::new(4, 5));
        assert_eq!(
            origin.in_direction(Direction::NorthEast, 2),
            Coordinates::new(7, 3)
        );
        assert_eq!(
            origin.in_direction(Direction::SouthWest, 1),
            Coordinates::new(4, 6)
        );
        assert_eq!(origin.step(Direction::NorthWest), Coordinates::new(4, 4));
    }

    // Unit steps and longer aligned offsets classify into the direction taken
    // Verified by reporting north for positive vertical offsets
    #[test]
    fn test_direction_to_aligned_offsets() {
        let origin = Coordinates::new(2, 3);

        for direction in Direction::ALL {
            assert_eq!(origin.direction_to(origin.step(direction)), Some(direction));
            assert_eq!(
                origin.direction_to(origin.in_direction(direction, 4)),
                Some(direction)
            );
        }
    }

    // Identical positions and skew offsets have no direction
    // Verified by classifying (2, 1) offsets as south-east
    #[test]
    fn test_direction_to_unclassifiable() {
        let origin = Coordinates::ORIGIN;

        assert_eq!(origin.direction_to(origin), None);
        assert_eq!(origin.direction_to(Coordinates::new(2, 1)), None);
        assert_eq!(origin.direction_to(Coordinates::new(-1, 3)), None);
    }

    // Paths take every horizontal step before any vertical step
    // Verified by interleaving horizontal and vertical steps
    #[test]
    fn test_path_to_orders_horizontal_first() {
        let path = Coordinates::new(3, 3).path_to(Coordinates::new(1, 5));

        assert_eq!(
            path,
            vec![
                Direction::West,
                Direction::West,
                Direction::South,
                Direction::South
            ]
        );
        assert!(Coordinates::ORIGIN.path_to(Coordinates::ORIGIN).is_empty());
    }

    // Walking a decomposed path arrives at its target
    // Verified by dropping the last step of the walk
    #[test]
    fn test_walk_follows_path() {
        let start = Coordinates::new(-2, 4);
        let target = Coordinates::new(3, -1);

        assert_eq!(start.walk(start.path_to(target)), target);
        assert_eq!(
            start.walk([Direction::NorthEast, Direction::NorthEast]),
            Coordinates::new(0, 2)
        );
    }

    // Neighbour positions pair each direction with the position one step away
    // Verified by omitting diagonals when requested
    #[test]
    fn test_neighbours() {
        let centre = Coordinates::new(1, 1);

        let orthogonal: Vec<_> = centre.neighbours(false).collect();
        assert_eq!(orthogonal.len(), 4);
        assert!(orthogonal.contains(&(Direction::North, Coordinates::new(1, 0))));

        let all: Vec<_> = centre.neighbours(true).collect();
        assert_eq!(all.len(), 8);
        assert!(all.contains(&(Direction::SouthEast, Coordinates::new(2, 2))));
    }

    // Coordinates display as an (x, y) pair and convert from tuples
    // Verified by printing the row before the column
    #[test]
    fn test_display_and_conversion() {
        let coordinates = Coordinates::from((7, -3));
        assert_eq!(coordinates, Coordinates::new(7, -3));
        assert_eq!(coordinates.to_string(), "(7, -3)");
    }
}

//! Tests for the depth-first spanning tree pass

#[cfg(test)]
mod tests {
    use braidmaze::algorithm::carving::carve_from;
    use braidmaze::analysis::MazeStatistics;
    use braidmaze::analysis::topology::{lattice_reachable, passage_degree};
    use braidmaze::{Grid, MazeError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests a 3x3 grid carved from its centre opens only the centre
    // Verified by skipping the bounds check on neighbours
    #[test]
    fn test_single_cell_region() {
        let mut grid = Grid::new(3, 3).expect("valid dimensions");
        let mut rng = StdRng::seed_from_u64(0);

        let report = carve_from(&mut grid, [1, 1], &mut rng).expect("in bounds");

        assert_eq!(report.cells_visited, 1);
        assert_eq!(report.leaves, 1);
        assert_eq!(report.forced_connections, 0);
        assert_eq!(grid.open_count(), 1);
        assert_eq!(grid.is_open([1, 1]).ok(), Some(true));
    }

    // Tests the 2x2 ring of a 5x5 grid is closed by the leaf's extra passage
    // Verified by not braiding leaves
    #[test]
    fn test_two_by_two_ring_is_closed() {
        for seed in 0..10 {
            let mut grid = Grid::new(5, 5).expect("valid dimensions");
            let mut rng = StdRng::seed_from_u64(seed);

            let report = carve_from(&mut grid, [1, 1], &mut rng).expect("in bounds");

            assert_eq!(report.cells_visited, 4);
            assert_eq!(report.leaves, 1);
            assert_eq!(report.forced_connections, 1);
            for connector in [[1, 2], [2, 1], [2, 3], [3, 2]] {
                assert_eq!(grid.is_open(connector).ok(), Some(true));
            }
        }
    }

    // Tests every lattice cell reachable from the start gets visited
    // Verified by stopping the walk after the first backtrack
    #[test]
    fn test_visits_every_reachable_cell() {
        let mut grid = Grid::new(21, 31).expect("valid dimensions");
        let mut rng = StdRng::seed_from_u64(17);
        let start = [5, 9];

        let report = carve_from(&mut grid, start, &mut rng).expect("in bounds");

        let lattice = lattice_reachable(&grid, start);
        assert_eq!(report.cells_visited, lattice.len());
        for position in lattice {
            assert_eq!(grid.is_open(position).ok(), Some(true), "{position:?}");
        }
    }

    // Tests the pass opens a tree plus one edge per braided leaf
    // Verified by letting the walk re-enter visited cells
    #[test]
    fn test_passages_form_tree_plus_forced_edges() {
        for seed in 0..10 {
            let mut grid = Grid::new(15, 23).expect("valid dimensions");
            let mut rng = StdRng::seed_from_u64(seed);
            let start = [0, 0];

            let report = carve_from(&mut grid, start, &mut rng).expect("in bounds");
            let statistics = MazeStatistics::collect(&grid, start);

            assert_eq!(
                statistics.passages,
                report.cells_visited - 1 + report.forced_connections
            );
            assert_eq!(statistics.cycles, report.forced_connections);
            assert!(statistics.is_connected());
        }
    }

    // Tests a one-wide corridor walks to the far end without braiding
    // Verified by counting the root as a leaf
    #[test]
    fn test_corridor_depth_and_single_leaf() {
        let mut grid = Grid::new(1, 201).expect("valid dimensions");
        let mut rng = StdRng::seed_from_u64(2);

        let report = carve_from(&mut grid, [0, 0], &mut rng).expect("in bounds");

        assert_eq!(report.cells_visited, 101);
        assert_eq!(report.max_depth, 101);
        assert_eq!(report.leaves, 1);
        assert_eq!(report.forced_connections, 0);
        assert_eq!(grid.open_count(), 201);
        assert_eq!(passage_degree(&grid, [0, 200]), 1);
    }

    // Tests large grids do not exhaust the call stack
    // Verified by replacing the frame stack with recursion
    #[test]
    fn test_large_grid_completes() {
        let mut grid = Grid::new(999, 999).expect("valid dimensions");
        let mut rng = StdRng::seed_from_u64(8);

        let report = carve_from(&mut grid, [0, 0], &mut rng).expect("in bounds");

        assert_eq!(report.cells_visited, 500 * 500);
        assert!(report.max_depth > 1);
    }

    // Tests cells already open before the pass stay open
    // Verified by resetting pre-opened cells to walls
    #[test]
    fn test_existing_openings_are_kept() {
        let mut grid = Grid::new(11, 11).expect("valid dimensions");
        let preopened = [[3, 3], [5, 6], [10, 10]];
        for position in preopened {
            grid.carve(position).expect("in bounds");
        }
        let mut rng = StdRng::seed_from_u64(4);

        carve_from(&mut grid, [1, 1], &mut rng).expect("in bounds");

        for position in preopened {
            assert_eq!(grid.is_open(position).ok(), Some(true));
        }
    }

    // Tests identical seeds carve identical grids
    // Verified by drawing the permutation from thread_rng
    #[test]
    fn test_deterministic_under_seed() {
        let carve = |seed| {
            let mut grid = Grid::new(25, 25).expect("valid dimensions");
            let mut rng = StdRng::seed_from_u64(seed);
            carve_from(&mut grid, [12, 12], &mut rng).expect("in bounds");
            grid
        };

        assert_eq!(carve(31), carve(31));
        assert_ne!(carve(31), carve(32));
    }

    // Tests an invalid start is reported
    // Verified by skipping the start carve
    #[test]
    fn test_invalid_start_is_an_error() {
        let mut grid = Grid::new(5, 5).expect("valid dimensions");
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            carve_from(&mut grid, [5, 0], &mut rng),
            Err(MazeError::OutOfBounds { .. })
        ));
    }
}

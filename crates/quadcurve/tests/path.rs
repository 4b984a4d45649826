//! Integration tests checking that grown grids stay one continuous path.
#[cfg(test)]
mod tests {
    use quadcurve::{Dir, Grid, PathGraph, grow};

    /// Grow the seed `steps` times.
    fn grown(steps: u32) -> Grid {
        let mut grid = Grid::seed();
        for _ in 0..steps {
            grid = grow(&grid);
        }
        grid
    }

    macro_rules! path_tests {
        ($($steps:literal),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<single_path_after_ $steps _steps>]() {
                        let grid = grown($steps);
                        assert_eq!(grid.side(), 2u32 << $steps);

                        let graph = PathGraph::new(&grid);
                        assert_eq!(
                            graph.edge_count(),
                            grid.len() - 1,
                            "wrong edge count at {} steps",
                            $steps
                        );
                        assert!(
                            graph.is_single_path(),
                            "grid is not a single path after {} steps",
                            $steps
                        );
                    }

                    #[test]
                    fn [<endpoints_after_ $steps _steps>]() {
                        let grid = grown($steps);
                        let mut ends = PathGraph::new(&grid).endpoints();
                        ends.sort_unstable();
                        assert_eq!(ends, vec![(0, 0), (grid.side() - 1, 0)]);
                    }
                }
            )*
        };
    }

    path_tests!(1, 2, 3, 4, 5, 6);

    #[test]
    fn every_cell_has_a_valid_code() {
        // The code set is closed under growth: round-tripping each cell
        // through the legacy encoding must succeed.
        let grid = grown(4);
        for (_, dir) in grid.iter() {
            assert!(Dir::from_code(dir.as_code()).is_ok());
        }
    }

    #[test]
    fn interior_cells_have_degree_two() {
        let grid = grown(3);
        let graph = PathGraph::new(&grid);
        let ends = graph.endpoints();
        for ((x, y), _) in grid.iter() {
            let expected = if ends.contains(&(x, y)) { 1 } else { 2 };
            assert_eq!(
                graph.degree(x, y),
                expected,
                "cell ({x},{y}) has the wrong degree"
            );
        }
    }
}

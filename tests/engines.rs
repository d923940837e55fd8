#[cfg(test)]
mod tests {
    use conway_scan::{Engine, Grid, NaiveStepper, Pattern, PrunedStepper};
    use rand::{Rng, SeedableRng};

    const SEED: u64 = 42;

    fn randomly_filled(side: usize, fill_rate: f64, seed: u64) -> (PrunedStepper, NaiveStepper) {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..side * side)
            .map(|_| rng.gen_bool(fill_rate))
            .collect::<Vec<_>>();
        let grid = Grid::from_cells(side, cells);
        (
            PrunedStepper::from_grid(grid.clone()),
            NaiveStepper::from_grid(grid),
        )
    }

    fn assert_fields_equal(pruned: &PrunedStepper, naive: &NaiveStepper) {
        let (a, b) = (pruned.grid(), naive.grid());
        assert_eq!(a.side(), b.side());
        if a == b {
            return;
        }
        let n = a.side();
        const K: usize = 6;
        for (i, (x, y)) in a.cells().iter().zip(b.cells()).enumerate() {
            if x != y {
                let (row, col) = (i / n, i % n);
                let (r1, c1) = (row.saturating_sub(K), col.saturating_sub(K));
                let (r2, c2) = ((row + K).min(n), (col + K).min(n));
                let mut picture = String::new();
                for r in r1..r2 {
                    for grid in [a, b] {
                        picture.push('|');
                        picture.extend(grid.row(r)[c1..c2].iter().map(|&c| if c { '#' } else { ' ' }));
                    }
                    picture.push_str("|\n");
                }
                panic!("Mismatch at ({}, {}):\n{}", row, col, picture);
            }
        }
    }

    fn assert_counters_consistent(pruned: &PrunedStepper) {
        assert_eq!(pruned.row_live_counts(), pruned.grid().row_counts().as_slice());
        assert_eq!(pruned.col_live_counts(), pruned.grid().col_counts().as_slice());
    }

    fn run_both(pruned: &mut PrunedStepper, naive: &mut NaiveStepper, steps: usize) {
        for _ in 0..steps {
            let expected = naive.step();
            let outcome = pruned.step();
            assert_eq!(outcome, expected);
            assert_eq!(outcome.live, pruned.population());
            assert_fields_equal(pruned, naive);
            assert_counters_consistent(pruned);
        }
    }

    #[test]
    fn test_random_fields_match_naive() {
        for side in [1, 2, 3, 17, 64] {
            for (i, fill_rate) in [0.5, 0.3, 0.9].into_iter().enumerate() {
                let (mut pruned, mut naive) = randomly_filled(side, fill_rate, SEED + i as u64);
                run_both(&mut pruned, &mut naive, 40);
            }
        }
    }

    #[test]
    fn test_sparse_fields_match_naive() {
        // few live cells leave gaps between evaluated columns
        for seed in 0..8 {
            let (mut pruned, mut naive) = randomly_filled(48, 0.03, seed);
            run_both(&mut pruned, &mut naive, 60);
        }
    }

    #[test]
    fn test_dying_row_does_not_hide_birth() {
        // The whole second row dies of overcrowding while the cell below its
        // middle still has three live neighbours in the old generation.
        let mut live = (0..7).map(|c| (0, c)).collect::<Vec<_>>();
        live.extend([(1, 2), (1, 3), (1, 4)]);
        let grid = Grid::from_live_cells(7, &live);
        let (mut pruned, mut naive) = (
            PrunedStepper::from_grid(grid.clone()),
            NaiveStepper::from_grid(grid),
        );
        run_both(&mut pruned, &mut naive, 1);
        assert!(pruned.grid().get(2, 3));
    }

    #[test]
    fn test_patterns_match_naive() {
        for pattern in Pattern::ALL {
            let grid = pattern.build(pattern.min_size().max(40), Some(SEED));
            let (mut pruned, mut naive) = (
                PrunedStepper::from_grid(grid.clone()),
                NaiveStepper::from_grid(grid),
            );
            run_both(&mut pruned, &mut naive, 100);
        }
    }

    #[test]
    fn test_full_field() {
        let grid = Grid::from_cells(5, vec![true; 25]);
        let (mut pruned, mut naive) = (
            PrunedStepper::from_grid(grid.clone()),
            NaiveStepper::from_grid(grid),
        );
        run_both(&mut pruned, &mut naive, 1);
        // only the corners keep 3 neighbours
        assert_eq!(pruned.live_cells(), vec![(0, 0), (0, 4), (4, 0), (4, 4)]);
    }
}

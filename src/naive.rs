use crate::{Engine, Grid, StepOutcome};

/// Reference engine: recomputes all 8 neighbours of every cell on every step.
pub struct NaiveStepper {
    cells_curr: Grid,
    cells_next: Grid,
}

impl NaiveStepper {
    fn count_neibs(&self, row: usize, col: usize) -> usize {
        let side = self.cells_curr.side();
        let (r1, r2) = (row.saturating_sub(1), (row + 1).min(side - 1));
        let (c1, c2) = (col.saturating_sub(1), (col + 1).min(side - 1));
        let mut neibs = 0;
        for r in r1..=r2 {
            for c in c1..=c2 {
                if (r, c) != (row, col) {
                    neibs += self.cells_curr.get(r, c) as usize;
                }
            }
        }
        neibs
    }
}

impl Engine for NaiveStepper {
    fn from_grid(grid: Grid) -> Self {
        Self {
            cells_next: Grid::blank(grid.side()),
            cells_curr: grid,
        }
    }

    fn name(&self) -> &'static str {
        "naive"
    }

    fn grid(&self) -> &Grid {
        &self.cells_curr
    }

    fn step(&mut self) -> StepOutcome {
        let side = self.cells_curr.side();
        let mut outcome = StepOutcome::default();
        for row in 0..side {
            for col in 0..side {
                let neibs = self.count_neibs(row, col);
                let alive = self.cells_curr.get(row, col);
                let next = if alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                outcome.live += next as usize;
                outcome.deaths += (alive && !next) as usize;
                self.cells_next.set(row, col, next);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        outcome
    }
}

use crate::{Engine, Grid, StepOutcome};
use log::trace;

/// Engine that only visits cells lying next to a live row and a live column.
///
/// Keeps the number of alive cells in every row and every column. A cell can
/// change its state only if it is alive or has a live neighbour, so rows (and
/// columns) whose 3-wide band holds no live cells are skipped entirely.
/// Inside a scanned row the neighbour count is carried along as a sliding
/// 3-column window.
pub struct PrunedStepper {
    grid: Grid,
    row_live: Vec<usize>,
    col_live: Vec<usize>,
}

/// Sliding window over the three rows around the scanned one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Window {
    /// Start of the row, or the previous column was skipped: sum from scratch.
    Resumed,
    /// The previous column was evaluated and `sum` covers its 3x3 block.
    Adjacent { sum: usize },
}

/// Whether index `i` or one of its neighbours has live cells.
fn band_active(counts: &[usize], i: usize) -> bool {
    counts[i] > 0
        || (i > 0 && counts[i - 1] > 0)
        || counts.get(i + 1).is_some_and(|&n| n > 0)
}

impl PrunedStepper {
    pub fn row_live_counts(&self) -> &[usize] {
        &self.row_live
    }

    pub fn col_live_counts(&self) -> &[usize] {
        &self.col_live
    }

    /// Number of alive cells of column `col` within rows `top..=bottom`.
    ///
    /// Columns outside the field contribute nothing.
    fn column_slice(&self, (top, bottom): (usize, usize), col: Option<usize>) -> usize {
        match col {
            Some(col) if col < self.grid.side() => (top..=bottom)
                .filter(|&row| self.grid.get(row, col))
                .count(),
            _ => 0,
        }
    }

    /// Sum of the 3x3 block centred at column `col`, own cell included.
    fn advance_window(&self, window: Window, rows: (usize, usize), col: usize) -> usize {
        match window {
            Window::Resumed => {
                self.column_slice(rows, col.checked_sub(1))
                    + self.column_slice(rows, Some(col))
                    + self.column_slice(rows, Some(col + 1))
            }
            Window::Adjacent { sum } => {
                sum - self.column_slice(rows, col.checked_sub(2))
                    + self.column_slice(rows, Some(col + 1))
            }
        }
    }
}

impl Engine for PrunedStepper {
    fn from_grid(grid: Grid) -> Self {
        Self {
            row_live: grid.row_counts(),
            col_live: grid.col_counts(),
            grid,
        }
    }

    fn name(&self) -> &'static str {
        "pruned"
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn step(&mut self) -> StepOutcome {
        let side = self.grid.side();
        // Counters are updated while scanning; pruning must see the generation being read.
        let row_active = self.row_live.clone();
        let col_active = self.col_live.clone();

        let mut pending = Vec::new();
        let mut outcome = StepOutcome::default();
        let mut rows_scanned = 0;

        for row in 0..side {
            if !band_active(&row_active, row) {
                continue;
            }
            rows_scanned += 1;
            let rows = (row.saturating_sub(1), (row + 1).min(side - 1));

            let mut window = Window::Resumed;
            for col in 0..side {
                if !band_active(&col_active, col) {
                    window = Window::Resumed;
                    continue;
                }
                let sum = self.advance_window(window, rows, col);
                window = Window::Adjacent { sum };

                let alive = self.grid.get(row, col);
                match (alive, sum - alive as usize) {
                    (false, 3) => {
                        pending.push((row, col));
                        outcome.live += 1;
                        self.row_live[row] += 1;
                        self.col_live[col] += 1;
                    }
                    (true, 2 | 3) => outcome.live += 1,
                    (true, _) => {
                        pending.push((row, col));
                        outcome.deaths += 1;
                        self.row_live[row] -= 1;
                        self.col_live[col] -= 1;
                    }
                    (false, _) => {}
                }
            }
        }

        for &(row, col) in &pending {
            self.grid.toggle(row, col);
        }
        trace!(
            "scanned {} of {} rows, {} toggles",
            rows_scanned,
            side,
            pending.len()
        );
        outcome
    }
}

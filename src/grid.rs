/// Square field of cells without wrapping edges.
///
/// Cells are stored row-major; `(row, col)` with row 0 at the top.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    side: usize,
}

impl Grid {
    /// Create a field of dead cells with dimensions `side x side`
    pub fn blank(side: usize) -> Self {
        assert!(side >= 1);
        Self {
            cells: vec![false; side * side],
            side,
        }
    }

    /// Create a field from a row-major vector of cell states
    pub fn from_cells(side: usize, cells: Vec<bool>) -> Self {
        assert!(side >= 1);
        assert_eq!(cells.len(), side * side);
        Self { cells, side }
    }

    /// Create a field with the given cells alive
    pub fn from_live_cells(side: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::blank(side);
        for &(row, col) in live {
            grid.set(row, col, true);
        }
        grid
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.side]
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        self.cells[col + row * self.side] = state;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[col + row * self.side];
        *cell = !*cell;
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(i, _)| (i / self.side, i % self.side))
            .collect()
    }

    /// Number of alive cells in every row.
    pub fn row_counts(&self) -> Vec<usize> {
        self.cells
            .chunks(self.side)
            .map(|row| row.iter().filter(|&&c| c).count())
            .collect()
    }

    /// Number of alive cells in every column.
    pub fn col_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.side];
        for row in self.cells.chunks(self.side) {
            for (count, &cell) in counts.iter_mut().zip(row) {
                *count += cell as usize;
            }
        }
        counts
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", self.side, self.side)?;
        for row in self.cells.chunks(self.side) {
            let line = row
                .iter()
                .map(|&c| if c { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn test_counts_follow_cells() {
        let grid = Grid::from_live_cells(4, &[(0, 0), (0, 3), (2, 3), (3, 1)]);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.row_counts(), vec![2, 0, 1, 1]);
        assert_eq!(grid.col_counts(), vec![1, 1, 0, 2]);
    }

    #[test]
    fn test_live_cells_are_row_major() {
        let grid = Grid::from_live_cells(3, &[(2, 0), (0, 2), (1, 1), (0, 0)]);
        assert_eq!(grid.live_cells(), vec![(0, 0), (0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::blank(2);
        grid.toggle(1, 0);
        assert!(grid.get(1, 0));
        grid.toggle(1, 0);
        assert!(!grid.get(1, 0));
        assert_eq!(grid.row(1), &[false, false]);
    }
}

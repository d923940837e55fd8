use crate::{Grid, NaiveStepper, PrunedStepper};
use std::{fmt, str::FromStr};

/// Result of advancing the field by one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Cells alive after the step (births and survivors).
    pub live: usize,
    /// Cells that died during the step.
    pub deaths: usize,
}

/// Engine trait for Game of Life on a bounded square field.
///
/// Cells outside the field are treated as dead; edges are not stitched together.
pub trait Engine {
    /// Take ownership of the initial field
    fn from_grid(grid: Grid) -> Self
    where
        Self: Sized;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    fn grid(&self) -> &Grid;

    /// Update the field once
    ///
    /// All cells are computed from the same generation, the field is only
    /// observable again after every transition has been applied.
    fn step(&mut self) -> StepOutcome;

    fn side(&self) -> usize {
        self.grid().side()
    }

    /// Coordinates of alive cells in row-major order.
    fn live_cells(&self) -> Vec<(usize, usize)> {
        self.grid().live_cells()
    }

    fn population(&self) -> usize {
        self.grid().population()
    }
}

/// Engine selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineKind {
    #[default]
    Pruned,
    Naive,
}

impl EngineKind {
    pub fn create(self, grid: Grid) -> Box<dyn Engine> {
        match self {
            Self::Pruned => Box::new(PrunedStepper::from_grid(grid)),
            Self::Naive => Box::new(NaiveStepper::from_grid(grid)),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pruned => "pruned",
            Self::Naive => "naive",
        })
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pruned" => Ok(Self::Pruned),
            "naive" => Ok(Self::Naive),
            _ => Err(format!("unknown engine {:?}, expected pruned or naive", s)),
        }
    }
}

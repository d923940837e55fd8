use super::Config;
use crate::RenderSink;

/// Last generation handed over by the simulation, as grey-scale pixels.
pub struct FrameBuffer {
    side: usize,
    pixels: Vec<u8>,
    population: usize,
}

impl FrameBuffer {
    pub fn new(side: usize, live_cells: &[(usize, usize)]) -> Self {
        let mut frame = Self {
            side,
            pixels: vec![],
            population: 0,
        };
        frame.render(side, live_cells);
        frame
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn population(&self) -> usize {
        self.population
    }
}

impl RenderSink for FrameBuffer {
    fn render(&mut self, side: usize, live_cells: &[(usize, usize)]) {
        self.side = side;
        self.pixels.clear();
        self.pixels.resize(side * side, Config::DEAD);
        for &(row, col) in live_cells {
            self.pixels[col + row * side] = Config::ALIVE;
        }
        self.population = live_cells.len();
    }
}

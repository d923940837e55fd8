use crate::{FpsLimiter, RenderSink, ReportSink, RunReport};
use log::info;
use std::io::{self, Write};

/// Prints every generation as text, `#` for alive and `.` for dead cells.
///
/// Frames are paced to at most `max_fps` per second.
pub struct TerminalSink<W: Write = io::Stdout> {
    out: W,
    limiter: FpsLimiter,
    frame: u64,
}

impl TerminalSink {
    pub fn stdout(max_fps: f64) -> Self {
        Self::new(io::stdout(), max_fps)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, max_fps: f64) -> Self {
        Self {
            out,
            limiter: FpsLimiter::new(max_fps),
            frame: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, side: usize, live_cells: &[(usize, usize)]) -> io::Result<()> {
        let mut rows = vec![vec![b'.'; side]; side];
        for &(row, col) in live_cells {
            rows[row][col] = b'#';
        }
        writeln!(
            self.out,
            "generation {}, {} live cells",
            self.frame,
            live_cells.len()
        )?;
        for row in rows {
            self.out.write_all(&row)?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, side: usize, live_cells: &[(usize, usize)]) {
        if let Err(err) = self.write_frame(side, live_cells) {
            log::warn!("failed to print generation {}: {}", self.frame, err);
        }
        self.frame += 1;
        self.limiter.delay();
    }
}

/// Ignores all frames.
pub struct SilentSink;

impl RenderSink for SilentSink {
    fn render(&mut self, _side: usize, _live_cells: &[(usize, usize)]) {}
}

/// Prints the summary to stdout and writes it to the log.
#[derive(Default)]
pub struct LogReporter;

impl ReportSink for LogReporter {
    fn report(&mut self, report: &RunReport) {
        info!(
            "finished: {} of {} steps, {} live, {} deaths, {:.1} steps/s",
            report.steps_processed,
            report.time_steps,
            report.total_live,
            report.total_deaths,
            report.steps_per_second()
        );
        println!("{}", report);
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalSink;
    use crate::RenderSink;

    #[test]
    fn test_terminal_frame() {
        let mut sink = TerminalSink::new(Vec::new(), 0.);
        sink.render(3, &[(0, 1), (2, 2)]);
        sink.render(3, &[]);
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "generation 0, 2 live cells\n.#.\n...\n..#\n\
             generation 1, 0 live cells\n...\n...\n...\n"
        );
    }
}

use crate::{Engine, NiceInt, StepOutcome};
use log::{debug, info};
use std::{
    fmt,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

/// Receives the alive cells of every generation before it is updated.
pub trait RenderSink {
    fn render(&mut self, side: usize, live_cells: &[(usize, usize)]);
}

impl<F: FnMut(usize, &[(usize, usize)])> RenderSink for F {
    fn render(&mut self, side: usize, live_cells: &[(usize, usize)]) {
        self(side, live_cells)
    }
}

/// Receives the summary once the run is over.
pub trait ReportSink {
    fn report(&mut self, report: &RunReport);
}

/// Summary of a finished (or interrupted) run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub engine: &'static str,
    pub started: SystemTime,
    pub finished: SystemTime,
    pub elapsed: Duration,
    pub time_steps: u64,
    pub steps_processed: u64,
    /// Live cells summed over all generations, the initial one included.
    pub total_live: u64,
    pub total_deaths: u64,
    pub stopped_early: bool,
}

impl RunReport {
    pub fn steps_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0. {
            self.steps_processed as f64 / secs
        } else {
            0.
        }
    }
}

fn unix_time(t: SystemTime) -> String {
    let since = t.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!(
        "{}.{:03} s since Unix epoch",
        since.as_secs(),
        since.subsec_millis()
    )
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine: {}", self.engine)?;
        writeln!(f, "Start time: {}", unix_time(self.started))?;
        writeln!(f, "End time: {}", unix_time(self.finished))?;
        writeln!(
            f,
            "Elapsed time: {:.3} ms",
            self.elapsed.as_secs_f64() * 1e3
        )?;
        write!(
            f,
            "Number of steps processed: {} of {}",
            NiceInt::from(self.steps_processed),
            NiceInt::from(self.time_steps)
        )?;
        if self.stopped_early {
            write!(f, " (stable, rest extrapolated)")?;
        }
        writeln!(f)?;
        writeln!(f, "Total living cells: {}", NiceInt::from(self.total_live))?;
        writeln!(f, "Total dead cells: {}", NiceInt::from(self.total_deaths))?;
        write!(
            f,
            "Average steps per second: {:.1}",
            self.steps_per_second()
        )
    }
}

struct Clock {
    wall: SystemTime,
    timer: Instant,
}

impl Clock {
    fn start() -> Self {
        Self {
            wall: SystemTime::now(),
            timer: Instant::now(),
        }
    }
}

/// Drives an engine for at most `time_steps` generations and keeps the totals.
///
/// The run stops early once a step has no deaths and the same number of live
/// cells as the step before, or leaves no live cells at all. The generations
/// that are not simulated then count with the last step's live cells. This
/// also fires for oscillators whose population does not change between phases,
/// so it is an approximation of "still life".
pub struct Simulation {
    engine: Box<dyn Engine>,
    time_steps: u64,
    steps_processed: u64,
    total_live: u64,
    total_deaths: u64,
    prev_live: Option<usize>,
    stable: bool,
    clock: Option<Clock>,
    elapsed: Option<Duration>,
}

impl Simulation {
    /// `total_live` is seeded with the population of the initial field.
    pub fn new(engine: Box<dyn Engine>, time_steps: u64) -> Self {
        let total_live = engine.population() as u64;
        info!(
            "{}x{} field, {} live cells, {} steps, {} engine",
            engine.side(),
            engine.side(),
            total_live,
            time_steps,
            engine.name()
        );
        Self {
            engine,
            time_steps,
            steps_processed: 0,
            total_live,
            total_deaths: 0,
            prev_live: None,
            stable: false,
            clock: None,
            elapsed: None,
        }
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub fn time_steps(&self) -> u64 {
        self.time_steps
    }

    pub fn steps_processed(&self) -> u64 {
        self.steps_processed
    }

    pub fn total_live(&self) -> u64 {
        self.total_live
    }

    pub fn total_deaths(&self) -> u64 {
        self.total_deaths
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn is_finished(&self) -> bool {
        self.stable || self.steps_processed >= self.time_steps
    }

    /// Process one generation
    ///
    /// The current field is handed to `render` before the update.
    /// Returns `None` when the run is already over.
    pub fn advance(&mut self, render: &mut dyn RenderSink) -> Option<StepOutcome> {
        if self.is_finished() {
            return None;
        }
        let timer = self.clock.get_or_insert_with(Clock::start).timer;

        render.render(self.engine.side(), &self.engine.live_cells());
        let outcome = self.engine.step();

        self.steps_processed += 1;
        self.total_live += outcome.live as u64;
        self.total_deaths += outcome.deaths as u64;
        debug!(
            "step {}: {} live, {} deaths",
            self.steps_processed, outcome.live, outcome.deaths
        );

        let repeated = outcome.deaths == 0 && self.prev_live == Some(outcome.live);
        if repeated || outcome.live == 0 {
            let remaining = self.time_steps - self.steps_processed;
            self.total_live += outcome.live as u64 * remaining;
            self.stable = true;
            if remaining > 0 {
                info!(
                    "stable after {} steps, extrapolating {} live cells over {} remaining steps",
                    self.steps_processed, outcome.live, remaining
                );
            }
        }
        self.prev_live = Some(outcome.live);

        if self.is_finished() {
            self.elapsed = Some(timer.elapsed());
        }
        Some(outcome)
    }

    /// Whether the configured bound was not reached because the field stabilized.
    pub fn stopped_early(&self) -> bool {
        self.stable && self.steps_processed < self.time_steps
    }

    pub fn report(&self) -> RunReport {
        let (started, elapsed) = match &self.clock {
            Some(clock) => (
                clock.wall,
                self.elapsed.unwrap_or_else(|| clock.timer.elapsed()),
            ),
            None => (SystemTime::now(), Duration::ZERO),
        };
        RunReport {
            engine: self.engine.name(),
            started,
            finished: started + elapsed,
            elapsed,
            time_steps: self.time_steps,
            steps_processed: self.steps_processed,
            total_live: self.total_live,
            total_deaths: self.total_deaths,
            stopped_early: self.stopped_early(),
        }
    }

    /// Advance until the run is over, then hand the summary to `report`.
    pub fn run(
        &mut self,
        render: &mut dyn RenderSink,
        report: &mut dyn ReportSink,
    ) -> RunReport {
        while self.advance(render).is_some() {}
        let summary = self.report();
        report.report(&summary);
        summary
    }
}

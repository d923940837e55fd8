mod grid;
mod gui;
mod naive;
mod patterns;
mod simulation;
mod sinks;
mod stepper;
mod utils;

pub use grid::Grid;
pub use gui::{App, Config};
pub use naive::NaiveStepper;
pub use patterns::{Pattern, UnknownPattern};
pub use simulation::{RenderSink, ReportSink, RunReport, Simulation};
pub use sinks::{LogReporter, SilentSink, TerminalSink};
pub use stepper::PrunedStepper;
pub use utils::{ConfigError, Engine, EngineKind, FpsLimiter, NiceInt, SimConfig, StepOutcome};

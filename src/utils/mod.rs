mod config;
mod format_int;
mod fps_limit;
mod traits;

pub use config::{ConfigError, SimConfig};
pub use format_int::NiceInt;
pub use fps_limit::FpsLimiter;
pub use traits::{Engine, EngineKind, StepOutcome};

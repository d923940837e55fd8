use crate::{Grid, Pattern, UnknownPattern};
use thiserror::Error;

/// Reasons a run configuration is rejected before the simulation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownPattern(#[from] UnknownPattern),
    #[error("grid size must be at least {min} for {pattern}, got {got}")]
    GridTooSmall {
        pattern: Pattern,
        min: usize,
        got: usize,
    },
}

/// Validated parameters of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pattern: Pattern,
    grid_size: usize,
    time_steps: u64,
    seed: Option<u64>,
}

impl SimConfig {
    pub fn new(
        pattern: Pattern,
        grid_size: usize,
        time_steps: u64,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let min = pattern.min_size();
        if grid_size < min {
            return Err(ConfigError::GridTooSmall {
                pattern,
                min,
                got: grid_size,
            });
        }
        Ok(Self {
            pattern,
            grid_size,
            time_steps,
            seed,
        })
    }

    /// Same as [`SimConfig::new`] with the pattern given by its selector (`b`, `glider-gun`, ...).
    pub fn parse(
        pattern: &str,
        grid_size: usize,
        time_steps: u64,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::new(pattern.parse()?, grid_size, time_steps, seed)
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn time_steps(&self) -> u64 {
        self.time_steps
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn initial_grid(&self) -> Grid {
        self.pattern.build(self.grid_size, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SimConfig};
    use crate::Pattern;

    #[test]
    fn test_min_sizes_enforced() {
        for pattern in Pattern::ALL {
            let min = pattern.min_size();
            assert!(SimConfig::new(pattern, min, 10, None).is_ok());
            if min > 1 {
                assert_eq!(
                    SimConfig::new(pattern, min - 1, 10, None),
                    Err(ConfigError::GridTooSmall {
                        pattern,
                        min,
                        got: min - 1
                    })
                );
            }
        }
        assert!(SimConfig::new(Pattern::Random, 0, 10, None).is_err());
    }

    #[test]
    fn test_parse_reports_unknown_pattern() {
        let err = SimConfig::parse("q", 10, 10, None).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPattern(_)));
        let config = SimConfig::parse("g", 36, 0, None).unwrap();
        assert_eq!(config.pattern(), Pattern::GliderGun);
        assert_eq!(config.initial_grid().population(), 36);
    }
}

use crate::Grid;
use std::{fmt, str::FromStr};

/// Initial field selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Vertical period-2 oscillator in the middle of the field.
    Blinker,
    /// Gosper glider gun in the top left corner.
    GliderGun,
    /// Every cell alive with probability `RANDOM_FILL_RATE`.
    Random,
    /// 5x5 seed of 13 cells in the middle of the field.
    Custom,
}

#[rustfmt::skip]
const GOSPER_GLIDER_GUN: [(usize, usize); 36] = [
    (5, 0), (5, 1), (6, 0), (6, 1),
    (5, 10), (6, 10), (7, 10),
    (4, 11), (8, 11),
    (3, 12), (9, 12), (3, 13), (9, 13),
    (6, 14),
    (4, 15), (8, 15),
    (5, 16), (6, 16), (7, 16),
    (6, 17),
    (3, 20), (4, 20), (5, 20), (3, 21), (4, 21), (5, 21),
    (2, 22), (6, 22),
    (1, 24), (2, 24), (6, 24), (7, 24),
    (3, 34), (4, 34), (3, 35), (4, 35),
];

// offsets from the middle cell
#[rustfmt::skip]
const CUSTOM: [(isize, isize); 13] = [
    (-2, -2), (-2, -1), (-2, 0), (-2, 2),
    (-1, -2),
    (0, 1), (0, 2),
    (1, -1), (1, 0), (1, 2),
    (2, -2), (2, 0), (2, 2),
];

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Blinker,
        Pattern::GliderGun,
        Pattern::Random,
        Pattern::Custom,
    ];

    pub const RANDOM_FILL_RATE: f64 = 0.5;

    /// Smallest field side the pattern fits into.
    pub fn min_size(self) -> usize {
        match self {
            Self::Blinker => 3,
            Self::GliderGun => 36,
            Self::Random => 1,
            Self::Custom => 5,
        }
    }

    /// Build the initial field
    ///
    /// `seed` - random seed for `Random` (if `None`, then random seed is generated)
    ///
    /// Panics if `side < self.min_size()`.
    pub fn build(self, side: usize, seed: Option<u64>) -> Grid {
        assert!(
            side >= self.min_size(),
            "{} needs a field of at least {} cells",
            self,
            self.min_size()
        );
        let mid = side / 2;
        match self {
            Self::Blinker => {
                Grid::from_live_cells(side, &[(mid - 1, mid), (mid, mid), (mid + 1, mid)])
            }
            Self::GliderGun => Grid::from_live_cells(side, &GOSPER_GLIDER_GUN),
            Self::Random => {
                use rand::{Rng, SeedableRng};
                let mut rng = if let Some(x) = seed {
                    rand_chacha::ChaCha8Rng::seed_from_u64(x)
                } else {
                    rand_chacha::ChaCha8Rng::from_entropy()
                };
                let cells = (0..side * side)
                    .map(|_| rng.gen_bool(Self::RANDOM_FILL_RATE))
                    .collect();
                Grid::from_cells(side, cells)
            }
            Self::Custom => {
                let live = CUSTOM
                    .iter()
                    .map(|&(dr, dc)| {
                        (
                            mid.wrapping_add_signed(dr),
                            mid.wrapping_add_signed(dc),
                        )
                    })
                    .collect::<Vec<_>>();
                Grid::from_live_cells(side, &live)
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blinker => "blinker",
            Self::GliderGun => "glider-gun",
            Self::Random => "random",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pattern {0:?}, expected one of: b[linker], g[lider-gun], r[andom], i/custom")]
pub struct UnknownPattern(pub String);

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "blinker" => Ok(Self::Blinker),
            "g" | "glider-gun" | "glider_gun" | "gun" => Ok(Self::GliderGun),
            "r" | "random" => Ok(Self::Random),
            "i" | "c" | "custom" => Ok(Self::Custom),
            _ => Err(UnknownPattern(s.to_string())),
        }
    }
}

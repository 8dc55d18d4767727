//! Coin flipping with an optionally biased, optionally seeded coin.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// The face a coin lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    /// Single-letter label drawn on the coin.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Heads => 'H',
            Self::Tails => 'T',
        }
    }

    #[must_use]
    pub const fn is_heads(&self) -> bool {
        matches!(self, Self::Heads)
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => write!(f, "Heads"),
            Self::Tails => write!(f, "Tails"),
        }
    }
}

/// Flips a coin that lands heads with probability `bias`.
#[derive(Debug, Clone)]
pub struct CoinFlipper {
    bias: f64,
    rng: ChaCha8Rng,
}

impl CoinFlipper {
    /// Creates a flipper. A seed makes the sequence of flips reproducible.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidProbability` unless `bias` is finite
    /// and within `[0, 1]`.
    pub fn new(bias: f64, seed: Option<u64>) -> Result<Self, SimulationError> {
        if !bias.is_finite() || !(0.0..=1.0).contains(&bias) {
            return Err(SimulationError::InvalidProbability(bias));
        }

        Ok(Self {
            bias,
            rng: seeded_rng(seed),
        })
    }

    /// Creates a flipper for a fair coin.
    #[must_use]
    pub fn fair(seed: Option<u64>) -> Self {
        Self {
            bias: 0.5,
            rng: seeded_rng(seed),
        }
    }

    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn flip(&mut self) -> CoinFace {
        if self.rng.gen::<f64>() < self.bias {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }

    pub fn flip_many(&mut self, count: usize) -> Vec<CoinFace> {
        let flips: Vec<CoinFace> = (0..count).map(|_| self.flip()).collect();
        tracing::debug!(
            count,
            heads = count_heads(&flips),
            bias = self.bias,
            "Flipped coins"
        );
        flips
    }

    /// Flips a signed count of coins, as trial counts are carried as `i64`.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidCount` for a negative count.
    pub fn flip_trials(&mut self, trials: i64) -> Result<Vec<CoinFace>, SimulationError> {
        let count = usize::try_from(trials).map_err(|_| {
            SimulationError::InvalidCount(format!("cannot flip {trials} coins"))
        })?;
        Ok(self.flip_many(count))
    }
}

/// Generator for simulations: reproducible when seeded, entropy otherwise.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Counts the heads in a sequence of flips.
#[must_use]
pub fn count_heads(flips: &[CoinFace]) -> i64 {
    flips.iter().filter(|face| face.is_heads()).count() as i64
}

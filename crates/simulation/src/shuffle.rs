//! Random pairwise shuffles of a row of coins.
//!
//! A row starts with all heads followed by all tails. Each step swaps two
//! distinct positions; the plan records the swaps so a renderer can replay
//! them one at a time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coin::CoinFace;

/// One exchange of two coins, with `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub left: usize,
    pub right: usize,
}

/// The starting row and the swaps applied to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShufflePlan {
    pub initial: Vec<CoinFace>,
    pub swaps: Vec<Swap>,
}

impl ShufflePlan {
    /// Builds a plan of `shuffles` random swaps.
    ///
    /// Rows with fewer than two coins cannot swap, so their plans are empty.
    pub fn generate<R: Rng + ?Sized>(
        heads: usize,
        tails: usize,
        shuffles: usize,
        rng: &mut R,
    ) -> Self {
        let initial = initial_row(heads, tails);
        let len = initial.len();

        let mut swaps = Vec::with_capacity(if len > 1 { shuffles } else { 0 });
        if len > 1 {
            for _ in 0..shuffles {
                let first = rng.gen_range(0..len);
                let mut second = rng.gen_range(0..len);
                while second == first {
                    second = rng.gen_range(0..len);
                }
                swaps.push(Swap {
                    left: first.min(second),
                    right: first.max(second),
                });
            }
        }

        tracing::debug!(heads, tails, swaps = swaps.len(), "Generated shuffle plan");
        Self { initial, swaps }
    }

    /// The row after the first `step` swaps have been applied.
    #[must_use]
    pub fn arrangement_after(&self, step: usize) -> Vec<CoinFace> {
        let mut row = self.initial.clone();
        for swap in self.swaps.iter().take(step) {
            row.swap(swap.left, swap.right);
        }
        row
    }

    /// Walks the plan once, yielding each swap with the row it leaves behind.
    pub fn steps(&self) -> impl Iterator<Item = (Swap, Vec<CoinFace>)> + '_ {
        let mut row = self.initial.clone();
        self.swaps.iter().map(move |swap| {
            row.swap(swap.left, swap.right);
            (*swap, row.clone())
        })
    }

    #[must_use]
    pub fn final_arrangement(&self) -> Vec<CoinFace> {
        self.arrangement_after(self.swaps.len())
    }
}

fn initial_row(heads: usize, tails: usize) -> Vec<CoinFace> {
    std::iter::repeat(CoinFace::Heads)
        .take(heads)
        .chain(std::iter::repeat(CoinFace::Tails).take(tails))
        .collect()
}

/// Renders a row as its coin symbols, e.g. `HHTHT`.
#[must_use]
pub fn render_row(row: &[CoinFace]) -> String {
    row.iter().map(CoinFace::symbol).collect()
}

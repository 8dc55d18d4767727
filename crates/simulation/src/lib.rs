//! Coin-flip data for the p-value explainer.
//!
//! - [`coin`]: flipping fair or biased coins, optionally seeded
//! - [`grid`]: coins dropped onto a jittered square grid
//! - [`shuffle`]: random pairwise swaps of a row of coins
//! - [`timing`]: drop and swap animation timing

pub mod coin;
pub mod error;
pub mod grid;
pub mod shuffle;
pub mod timing;

pub use coin::{count_heads, seeded_rng, CoinFace, CoinFlipper};
pub use error::SimulationError;
pub use grid::{columns, GridCoin, GridDrop};
pub use shuffle::{render_row, ShufflePlan, Swap};
pub use timing::{ease_in_out_quad, swap_progress, AnimationTiming, DropSchedule, SwapFrame};

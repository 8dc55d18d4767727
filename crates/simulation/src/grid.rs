//! Coins dropped onto a square grid.
//!
//! Every coin gets a grid cell, a little jitter inside it, its own start
//! height, fall speed and tumble. Positions are in scene units, with the
//! grid centered on the origin.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coin::CoinFace;
use crate::timing::AnimationTiming;

/// Distance between neighbouring grid cells.
pub const GRID_SPACING: f64 = 2.5;
/// Full width of the random offset applied inside a cell.
pub const GRID_JITTER: f64 = 1.0;
/// Extra random height added on top of the base drop height.
pub const HEIGHT_SPREAD: f64 = 20.0;
/// Slowest fall speed, in scene units per frame.
pub const MIN_FALL_SPEED: f64 = 0.1;
/// Random extra fall speed on top of [`MIN_FALL_SPEED`].
pub const FALL_SPEED_SPREAD: f64 = 0.1;
/// Largest spin per frame around one axis.
pub const MAX_SPIN: f64 = 0.2;
/// The drop animation stops after this many frames even if coins are airborne.
pub const FRAME_CAP: u32 = 1000;

/// One coin of a grid drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCoin {
    pub face: CoinFace,
    pub row: usize,
    pub col: usize,
    /// Resting x position, jitter included
    pub x: f64,
    /// Resting z position, jitter included
    pub z: f64,
    pub start_height: f64,
    /// Distance fallen per frame
    pub fall_speed: f64,
    /// Initial rotation around x, y and z
    pub rotation: [f64; 3],
    /// Rotation added per frame while falling
    pub spin: [f64; 3],
}

impl GridCoin {
    /// Frames until the coin reaches `landing_height`.
    #[must_use]
    pub fn frames_to_land(&self, landing_height: f64) -> u32 {
        let fall = self.start_height - landing_height;
        if fall <= 0.0 {
            return 0;
        }
        (fall / self.fall_speed).ceil() as u32
    }

    /// Height after `frame` frames, resting at `landing_height` once landed.
    #[must_use]
    pub fn height_at_frame(&self, frame: u32, landing_height: f64) -> f64 {
        (self.start_height - self.fall_speed * f64::from(frame)).max(landing_height)
    }

    /// Rotation around x once landed: flat for heads, flipped for tails.
    #[must_use]
    pub fn resting_tilt(&self) -> f64 {
        match self.face {
            CoinFace::Heads => 0.0,
            CoinFace::Tails => PI,
        }
    }
}

/// A seeded layout of coins falling onto a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDrop {
    pub cols: usize,
    pub landing_height: f64,
    pub coins: Vec<GridCoin>,
}

impl GridDrop {
    /// Lays out `faces` on a `ceil(sqrt(n))`-column grid.
    pub fn generate<R: Rng + ?Sized>(
        faces: &[CoinFace],
        timing: &AnimationTiming,
        rng: &mut R,
    ) -> Self {
        let cols = columns(faces.len());
        let offset = cols.saturating_sub(1) as f64 * GRID_SPACING / 2.0;

        let coins = faces
            .iter()
            .enumerate()
            .map(|(i, &face)| {
                let (row, col) = (i / cols, i % cols);
                let jitter_x = (rng.gen::<f64>() - 0.5) * GRID_JITTER;
                let jitter_z = (rng.gen::<f64>() - 0.5) * GRID_JITTER;
                let start_height = timing.drop_height + rng.gen::<f64>() * HEIGHT_SPREAD;
                let rotation = [
                    rng.gen::<f64>() * PI,
                    rng.gen::<f64>() * PI,
                    rng.gen::<f64>() * PI,
                ];
                let fall_speed = MIN_FALL_SPEED + rng.gen::<f64>() * FALL_SPEED_SPREAD;
                let spin = [
                    (rng.gen::<f64>() - 0.5) * MAX_SPIN,
                    (rng.gen::<f64>() - 0.5) * MAX_SPIN,
                    (rng.gen::<f64>() - 0.5) * MAX_SPIN,
                ];
                GridCoin {
                    face,
                    row,
                    col,
                    x: col as f64 * GRID_SPACING - offset + jitter_x,
                    z: row as f64 * GRID_SPACING - offset + jitter_z,
                    start_height,
                    fall_speed,
                    rotation,
                    spin,
                }
            })
            .collect();

        tracing::debug!(coins = faces.len(), cols, "Generated grid drop");
        Self {
            cols,
            landing_height: timing.landing_height,
            coins,
        }
    }

    /// Frames until the last coin lands, limited to [`FRAME_CAP`].
    #[must_use]
    pub fn frames_to_settle(&self) -> u32 {
        self.coins
            .iter()
            .map(|coin| coin.frames_to_land(self.landing_height))
            .max()
            .unwrap_or(0)
            .min(FRAME_CAP)
    }

    #[must_use]
    pub fn all_landed_by(&self, frame: u32) -> bool {
        self.coins
            .iter()
            .all(|coin| coin.frames_to_land(self.landing_height) <= frame)
    }

    /// Faces grouped by grid row, in drop order.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<CoinFace>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.coins
            .chunks(self.cols)
            .map(|row| row.iter().map(|coin| coin.face).collect())
            .collect()
    }
}

/// Columns of the square-ish grid holding `n` coins.
#[must_use]
pub fn columns(n: usize) -> usize {
    (n as f64).sqrt().ceil() as usize
}

//! Animation timing for coin drops and swaps.
//!
//! Renderers ask these functions where a coin should be at a given moment;
//! nothing here draws anything.

use std::f64::consts::PI;
use std::time::Duration;

use coinflip_core::TimingConfig;
use serde::{Deserialize, Serialize};

/// Timing parameters for drop and swap animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    /// Delay between releasing consecutive coins
    pub drop_interval: Duration,
    /// Time one swap takes from start to finish
    pub swap_duration: Duration,
    /// Rest after each swap
    pub swap_pause: Duration,
    /// Rest before the first swap
    pub start_delay: Duration,
    /// Peak height of the arc a swapping coin travels
    pub arc_height: f64,
    pub drop_height: f64,
    pub landing_height: f64,
    /// Distance fallen per frame
    pub fall_speed: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::from(&TimingConfig::default())
    }
}

impl From<&TimingConfig> for AnimationTiming {
    fn from(config: &TimingConfig) -> Self {
        Self {
            drop_interval: Duration::from_millis(config.drop_interval_ms),
            swap_duration: Duration::from_millis(config.swap_duration_ms),
            swap_pause: Duration::from_millis(config.swap_pause_ms),
            start_delay: Duration::from_millis(config.start_delay_ms),
            arc_height: config.arc_height,
            drop_height: config.drop_height,
            landing_height: config.landing_height,
            fall_speed: config.fall_speed,
        }
    }
}

/// Quadratic ease-in-out; `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Fraction of a swap completed after `elapsed`, clamped to `[0, 1]`.
#[must_use]
pub fn swap_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Positions of the two coins in a swap at one instant.
///
/// The left coin moves right and rises; the right coin moves left and dips,
/// so the pair traces mirrored arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapFrame {
    /// Eased progress in `[0, 1]`
    pub eased: f64,
    /// Horizontal offset of the left coin from its start
    pub left_dx: f64,
    /// Horizontal offset of the right coin from its start
    pub right_dx: f64,
    /// Vertical offset of the left coin; negative is up
    pub left_dy: f64,
    /// Vertical offset of the right coin
    pub right_dy: f64,
}

impl SwapFrame {
    /// Frame at linear `progress` for coins `distance` apart.
    #[must_use]
    pub fn at(progress: f64, distance: f64, arc_height: f64) -> Self {
        let eased = ease_in_out_quad(progress);
        let lift = (eased * PI).sin() * arc_height;
        Self {
            eased,
            left_dx: distance * eased,
            right_dx: -distance * eased,
            left_dy: -lift,
            right_dy: lift,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.eased >= 1.0
    }
}

/// When each coin in a line of falling coins is released and lands.
#[derive(Debug, Clone)]
pub struct DropSchedule {
    timing: AnimationTiming,
}

impl DropSchedule {
    #[must_use]
    pub fn new(timing: AnimationTiming) -> Self {
        Self { timing }
    }

    /// Time at which coin `index` starts falling.
    #[must_use]
    pub fn release_time(&self, index: usize) -> Duration {
        self.timing.drop_interval * u32::try_from(index).unwrap_or(u32::MAX)
    }

    /// Frames a coin spends falling before it lands.
    #[must_use]
    pub fn frames_to_land(&self) -> u32 {
        let fall = self.timing.drop_height - self.timing.landing_height;
        if fall <= 0.0 || self.timing.fall_speed <= 0.0 {
            return 0;
        }
        (fall / self.timing.fall_speed).ceil() as u32
    }

    /// Height of a coin after `frame` frames of falling, resting at the
    /// landing height once it arrives.
    #[must_use]
    pub fn height_at_frame(&self, frame: u32) -> f64 {
        let height = self.timing.drop_height - self.timing.fall_speed * f64::from(frame);
        height.max(self.timing.landing_height)
    }

    /// How many of `count` coins have been released after `elapsed`.
    #[must_use]
    pub fn released_by(&self, elapsed: Duration, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        if self.timing.drop_interval.is_zero() {
            return count;
        }
        let intervals = elapsed.as_nanos() / self.timing.drop_interval.as_nanos();
        usize::try_from(intervals)
            .map_or(count, |n| n.saturating_add(1))
            .min(count)
    }

    #[must_use]
    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

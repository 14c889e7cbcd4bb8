//! Random wind generation
//!
//! Wind is resampled on a fixed tick schedule from a seeded RNG, so runs
//! are reproducible. Strength stays a real number end-to-end; any display
//! formatting happens at the rendering boundary, never here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Tuning;

/// Which way the wind blows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    Left,
    Right,
}

impl WindDirection {
    /// Sign applied to the horizontal velocity delta
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            WindDirection::Left => -1.0,
            WindDirection::Right => 1.0,
        }
    }
}

/// Wind snapshot handed to the dynamics and the HUD each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    /// Magnitude of the per-tick horizontal velocity delta
    pub strength: f32,
    pub direction: WindDirection,
}

impl WindState {
    /// Signed velocity delta this wind applies per tick
    #[inline]
    pub fn velocity_delta(&self) -> f32 {
        self.strength * self.direction.signum()
    }
}

/// Timed wind generator, parameterized by level
pub struct Wind {
    state: WindState,
    change_timer: u32,
    max_strength: f32,
    base_max_strength: f32,
    increase_per_level: f32,
    change_interval: u32,
    particle_chance: f32,
    rng: Pcg32,
}

impl Wind {
    /// Create a generator for the given level with an immediate sample
    pub fn new(tuning: &Tuning, level: u32, seed: u64) -> Self {
        let mut wind = Self {
            state: WindState {
                strength: 0.0,
                direction: WindDirection::Right,
            },
            change_timer: 0,
            max_strength: 0.0,
            base_max_strength: tuning.wind_max_strength,
            increase_per_level: tuning.wind_increase_per_level,
            change_interval: tuning.wind_change_interval,
            particle_chance: tuning.wind_particle_chance,
            rng: Pcg32::seed_from_u64(seed),
        };
        wind.set_level(level);
        wind
    }

    /// Current wind snapshot
    pub fn state(&self) -> WindState {
        self.state
    }

    /// Active ceiling for this level
    pub fn max_strength(&self) -> f32 {
        self.max_strength
    }

    /// Draw a fresh direction and strength below the active ceiling
    pub fn sample(&mut self) -> WindState {
        let direction = if self.rng.random_bool(0.5) {
            WindDirection::Right
        } else {
            WindDirection::Left
        };
        let strength = if self.max_strength > 0.0 {
            self.rng.random_range(0.0..self.max_strength)
        } else {
            0.0
        };
        self.state = WindState {
            strength,
            direction,
        };
        self.state
    }

    /// Advance one tick: resample only when the change interval elapses,
    /// otherwise the current state holds.
    pub fn advance(&mut self) -> WindState {
        self.change_timer += 1;
        if self.change_timer >= self.change_interval {
            self.change_timer = 0;
            self.sample();
        }
        self.state
    }

    /// Recompute the ceiling for a level and resample immediately
    pub fn set_level(&mut self, level: u32) {
        self.max_strength =
            self.base_max_strength + (level.saturating_sub(1)) as f32 * self.increase_per_level;
        self.change_timer = 0;
        self.sample();
    }

    /// Advisory: whether the renderer should spawn a wind particle this
    /// tick. Probability scales with strength. Has no effect on
    /// simulation state beyond consuming RNG.
    pub fn particle_roll(&mut self) -> bool {
        let p = (self.state.strength * self.particle_chance).clamp(0.0, 1.0);
        self.rng.random_bool(p as f64)
    }
}

//! Data-driven game balance
//!
//! Every tunable the simulation reads lives in one immutable [`Tuning`]
//! struct, handed to each component at construction. Nothing in `sim`
//! reads ambient global state.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Full set of balance constants for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Target tick rate (Hz); informational for the frame scheduler
    pub tick_rate: u32,

    /// Base downward acceleration per tick
    pub gravity: f32,
    /// Thrust magnitude per burning tick
    pub thrust: f32,

    // Rocket
    pub rocket_width: f32,
    pub rocket_height: f32,
    /// Rotation limit in degrees
    pub max_angle: f32,
    /// Degrees per rotate command
    pub rotation_step: f32,
    pub fuel_consumption: f32,
    pub initial_fuel: f32,
    /// Spawn height for a fresh attempt
    pub start_y: f32,

    // Wind
    pub wind_max_strength: f32,
    pub wind_change_interval: u32,
    pub wind_particle_chance: f32,

    // Landing thresholds
    pub max_landing_velocity: f32,
    pub max_landing_angle: f32,

    // Scoring
    pub perfect_landing: u32,
    pub good_landing: u32,
    pub fuel_bonus_multiplier: f32,

    // Level progression
    pub level_count: u32,
    pub wind_increase_per_level: f32,
    pub gravity_increase_per_level: f32,
    pub pad_width_decrease_per_level: f32,
    pub base_pad_width: f32,
    pub min_pad_width: f32,

    /// Ground line offset from the bottom of the play area
    pub ground_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: consts::TICK_RATE,
            gravity: consts::GRAVITY,
            thrust: consts::THRUST,
            rocket_width: consts::ROCKET_WIDTH,
            rocket_height: consts::ROCKET_HEIGHT,
            max_angle: consts::MAX_ANGLE,
            rotation_step: consts::ROTATION_STEP,
            fuel_consumption: consts::FUEL_CONSUMPTION,
            initial_fuel: consts::INITIAL_FUEL,
            start_y: consts::START_Y,
            wind_max_strength: consts::WIND_MAX_STRENGTH,
            wind_change_interval: consts::WIND_CHANGE_INTERVAL,
            wind_particle_chance: consts::WIND_PARTICLE_CHANCE,
            max_landing_velocity: consts::MAX_LANDING_VELOCITY,
            max_landing_angle: consts::MAX_LANDING_ANGLE,
            perfect_landing: consts::PERFECT_LANDING,
            good_landing: consts::GOOD_LANDING,
            fuel_bonus_multiplier: consts::FUEL_BONUS_MULTIPLIER,
            level_count: consts::LEVEL_COUNT,
            wind_increase_per_level: consts::WIND_INCREASE_PER_LEVEL,
            gravity_increase_per_level: consts::GRAVITY_INCREASE_PER_LEVEL,
            pad_width_decrease_per_level: consts::PAD_WIDTH_DECREASE_PER_LEVEL,
            base_pad_width: consts::BASE_PAD_WIDTH,
            min_pad_width: consts::MIN_PAD_WIDTH,
            ground_offset: consts::GROUND_OFFSET,
        }
    }
}

impl Tuning {
    /// Parse a balance file. Unknown fields are ignored and missing
    /// fields fall back to defaults, so old balance files keep loading.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                log::warn!("Failed to parse tuning JSON: {e}");
                None
            }
        }
    }

    /// Load a balance file from disk, falling back to defaults if the
    /// file is missing or malformed. Never an error the caller must
    /// handle; balance problems are logged and the game stays playable.
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Some(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                None => Self::default(),
            },
            Err(e) => {
                log::warn!("No tuning file at {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

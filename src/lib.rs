//! Touchdown - a rocket landing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight dynamics, wind, levels, landing)
//! - `scores`: Player score ledger with monotonic remote merge
//! - `tuning`: Data-driven game balance
//!
//! The crate is the simulation half of the game only. Rendering, input
//! capture, and leaderboard transport are external consumers of the
//! per-tick snapshots and events the [`sim::SimulationClock`] produces.

pub mod scores;
pub mod sim;
pub mod tuning;

pub use scores::{PlayerRecord, ScoreLedger};
pub use tuning::Tuning;

/// Game configuration constants
///
/// These are the default balance values; [`tuning::Tuning`] carries them
/// into the components so nothing reads ambient globals.
pub mod consts {
    /// Target tick rate (Hz). Velocity/thrust constants are tuned for
    /// one-unit timesteps at this rate; the integrator itself does not
    /// scale by dt.
    pub const TICK_RATE: u32 = 60;

    /// Downward acceleration per tick at level 1
    pub const GRAVITY: f32 = 0.05;
    /// Thrust magnitude per tick while burning
    pub const THRUST: f32 = 0.1;

    /// Rocket dimensions (play-area units)
    pub const ROCKET_WIDTH: f32 = 20.0;
    pub const ROCKET_HEIGHT: f32 = 40.0;
    /// Rotation limit (degrees, either side of vertical)
    pub const MAX_ANGLE: f32 = 45.0;
    /// Degrees per rotate command
    pub const ROTATION_STEP: f32 = 5.0;
    /// Fuel burned per thrusting tick
    pub const FUEL_CONSUMPTION: f32 = 0.1;
    pub const INITIAL_FUEL: f32 = 100.0;
    /// Spawn height for a fresh attempt
    pub const START_Y: f32 = 50.0;

    /// Wind ceiling at level 1
    pub const WIND_MAX_STRENGTH: f32 = 0.03;
    /// Ticks between wind resamples
    pub const WIND_CHANGE_INTERVAL: u32 = 300;
    /// Scales the advisory wind-particle probability (per tick, times strength)
    pub const WIND_PARTICLE_CHANCE: f32 = 0.3;

    /// Maximum vertical speed for a safe landing
    pub const MAX_LANDING_VELOCITY: f32 = 2.0;
    /// Maximum |angle| for a safe landing (degrees)
    pub const MAX_LANDING_ANGLE: f32 = 15.0;

    /// Score for a perfect landing
    pub const PERFECT_LANDING: u32 = 1000;
    /// Score for a good (safe but imprecise) landing
    pub const GOOD_LANDING: u32 = 500;
    /// Remaining fuel is worth this many points per unit
    pub const FUEL_BONUS_MULTIPLIER: f32 = 10.0;

    /// Number of levels before the counter wraps
    pub const LEVEL_COUNT: u32 = 5;
    pub const WIND_INCREASE_PER_LEVEL: f32 = 0.005;
    pub const GRAVITY_INCREASE_PER_LEVEL: f32 = 0.01;
    pub const PAD_WIDTH_DECREASE_PER_LEVEL: f32 = 10.0;
    /// Pad width at level 1
    pub const BASE_PAD_WIDTH: f32 = 100.0;
    /// Pad never shrinks below this
    pub const MIN_PAD_WIDTH: f32 = 30.0;

    /// The ground line sits this far above the bottom of the play area
    pub const GROUND_OFFSET: f32 = 50.0;
}

/// Clamp an angle (degrees) to the rocket's rotation limits
#[inline]
pub fn clamp_angle(angle: f32, max_angle: f32) -> f32 {
    angle.clamp(-max_angle, max_angle)
}

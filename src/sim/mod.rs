//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one unit step per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The [`SimulationClock`] drives one tick as: wind → flight dynamics →
//! ground test → (on crossing) landing evaluation → score update.

pub mod clock;
pub mod landing;
pub mod level;
pub mod rocket;
pub mod wind;

pub use clock::{ClockPhase, ControlInput, GameEvent, SimulationClock};
pub use landing::{LandingGrade, LandingOutcome, evaluate};
pub use level::{LevelConfig, LevelProgression};
pub use rocket::{Rocket, RocketState};
pub use wind::{Wind, WindDirection, WindState};

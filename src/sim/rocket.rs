//! Rocket flight dynamics
//!
//! Explicit Euler integration of gravity, lateral wind, and angled thrust,
//! one unit timestep per tick. The rocket owns its kinematic state; the
//! clock feeds it the current gravity and wind each tick and consumes the
//! returned snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Tuning;

use super::wind::WindDirection;

/// Kinematic snapshot of the rocket, replaced wholesale each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketState {
    /// Top-left corner of the rocket in play-area coordinates (y grows down)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Tilt from vertical, degrees, positive leaning right
    pub angle: f32,
    pub fuel: f32,
    pub thrusting: bool,
}

impl RocketState {
    /// Horizontal center, the point tested against the pad span
    pub fn center_x(&self, width: f32) -> f32 {
        self.pos.x + width / 2.0
    }
}

/// The craft under simulation
///
/// Angle is mutated only by discrete rotate commands, never by `tick`.
#[derive(Debug, Clone)]
pub struct Rocket {
    state: RocketState,
    width: f32,
    max_angle: f32,
    rotation_step: f32,
    thrust: f32,
    fuel_consumption: f32,
    initial_fuel: f32,
    start_y: f32,
}

impl Rocket {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            state: RocketState {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                angle: 0.0,
                fuel: tuning.initial_fuel,
                thrusting: false,
            },
            width: tuning.rocket_width,
            max_angle: tuning.max_angle,
            rotation_step: tuning.rotation_step,
            thrust: tuning.thrust,
            fuel_consumption: tuning.fuel_consumption,
            initial_fuel: tuning.initial_fuel,
            start_y: tuning.start_y,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &RocketState {
        &self.state
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Reset for a new attempt: centered at the spawn height, at rest,
    /// upright, tanks full.
    pub fn reset(&mut self, play_width: f32) {
        self.state = RocketState {
            pos: Vec2::new(play_width / 2.0 - self.width / 2.0, self.start_y),
            vel: Vec2::ZERO,
            angle: 0.0,
            fuel: self.initial_fuel,
            thrusting: false,
        };
    }

    pub fn set_thrusting(&mut self, thrusting: bool) {
        self.state.thrusting = thrusting;
    }

    /// Tilt one step to the left, clamped to the rotation limit
    pub fn rotate_left(&mut self) {
        self.state.angle =
            crate::clamp_angle(self.state.angle - self.rotation_step, self.max_angle);
    }

    /// Tilt one step to the right, clamped to the rotation limit
    pub fn rotate_right(&mut self) {
        self.state.angle =
            crate::clamp_angle(self.state.angle + self.rotation_step, self.max_angle);
    }

    /// Clamp the rocket back inside the play area after a resize
    pub fn clamp_to_width(&mut self, play_width: f32) {
        let max_x = play_width - self.width;
        if self.state.pos.x > max_x {
            self.state.pos.x = max_x;
        }
    }

    /// Advance one tick. Total over all numeric inputs; never fails.
    ///
    /// Order matters: gravity, then wind, then thrust, then the fuel
    /// clamp, then position integration, then the side-wall bounce.
    /// Returns the post-tick snapshot for the collision test and HUD.
    pub fn tick(
        &mut self,
        gravity: f32,
        wind_strength: f32,
        wind_direction: WindDirection,
        play_width: f32,
    ) -> RocketState {
        let s = &mut self.state;

        s.vel.y += gravity;
        s.vel.x += wind_strength * wind_direction.signum();

        if s.thrusting && s.fuel > 0.0 {
            // Thrust acts along the hull axis: angle is measured from
            // vertical, so cos lifts and sin pushes sideways.
            let angle_rad = s.angle.to_radians();
            s.vel.y -= self.thrust * angle_rad.cos();
            s.vel.x += self.thrust * angle_rad.sin();
            s.fuel -= self.fuel_consumption;
        }
        s.fuel = s.fuel.max(0.0);

        s.pos += s.vel;

        // Side walls: clamp and bounce back inelastically.
        let max_x = play_width - self.width;
        if s.pos.x < 0.0 {
            s.pos.x = 0.0;
            s.vel.x *= -0.5;
        } else if s.pos.x > max_x {
            s.pos.x = max_x;
            s.vel.x *= -0.5;
        }

        self.state
    }
}

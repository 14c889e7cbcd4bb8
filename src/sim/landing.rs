//! Landing evaluation
//!
//! Classifies a terminal rocket state against the pad geometry and safety
//! thresholds. Three tiers, evaluated once per attempt when the rocket
//! crosses the ground line: contained on the pad → safe speed and angle →
//! graded perfect or good. Anything else is a crash.

use serde::{Deserialize, Serialize};

use crate::Tuning;

use super::level::LevelConfig;
use super::rocket::RocketState;

/// How an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingGrade {
    /// Well under half the speed/angle limits
    Perfect,
    /// Within the limits but not perfect
    Good,
    /// On the pad but too fast or too tilted
    Crashed,
    /// Came down off the pad entirely
    MissedPad,
}

impl LandingGrade {
    /// Successful landings increment the player's landing count
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, LandingGrade::Perfect | LandingGrade::Good)
    }
}

/// Outcome of one attempt, produced exactly once at touchdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingOutcome {
    pub grade: LandingGrade,
    /// Base score for the grade (zero on a crash or miss)
    pub score: u32,
    /// floor(remaining fuel × multiplier), zero unless the landing was safe
    pub fuel_bonus: u32,
}

impl LandingOutcome {
    fn crash(grade: LandingGrade) -> Self {
        Self {
            grade,
            score: 0,
            fuel_bonus: 0,
        }
    }

    /// Score delta applied to the ledger for this attempt
    #[inline]
    pub fn total_score(&self) -> u32 {
        self.score + self.fuel_bonus
    }
}

/// Classify a terminal rocket state against the current pad
pub fn evaluate(state: &RocketState, pad: &LevelConfig, tuning: &Tuning) -> LandingOutcome {
    // Tier 1: the rocket's center must come down strictly inside the pad
    if !pad.contains_x(state.center_x(tuning.rocket_width)) {
        return LandingOutcome::crash(LandingGrade::MissedPad);
    }

    // Tier 2: speed and tilt inside the safety envelope
    let safe = state.vel.y < tuning.max_landing_velocity
        && state.angle.abs() < tuning.max_landing_angle;
    if !safe {
        return LandingOutcome::crash(LandingGrade::Crashed);
    }

    // Tier 3: half the envelope earns the perfect grade
    let perfect = state.vel.y < tuning.max_landing_velocity / 2.0
        && state.angle.abs() < tuning.max_landing_angle / 2.0;
    let (grade, score) = if perfect {
        (LandingGrade::Perfect, tuning.perfect_landing)
    } else {
        (LandingGrade::Good, tuning.good_landing)
    };

    LandingOutcome {
        grade,
        score,
        fuel_bonus: (state.fuel * tuning.fuel_bonus_multiplier).floor() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const EPS: f32 = 0.001;

    fn pad() -> LevelConfig {
        LevelConfig {
            level: 1,
            gravity: 0.05,
            pad_width: 100.0,
            pad_x: 350.0,
        }
    }

    /// A rocket whose center sits over the middle of `pad()`
    fn touching_down(vy: f32, angle: f32, fuel: f32) -> RocketState {
        RocketState {
            pos: Vec2::new(390.0, 550.0),
            vel: Vec2::new(0.0, vy),
            angle,
            fuel,
            thrusting: false,
        }
    }

    #[test]
    fn test_perfect_landing() {
        let tuning = Tuning::default();
        let state = touching_down(tuning.max_landing_velocity / 2.0 - EPS, 0.0, 40.0);
        let outcome = evaluate(&state, &pad(), &tuning);
        assert_eq!(outcome.grade, LandingGrade::Perfect);
        assert_eq!(outcome.score, tuning.perfect_landing);
        assert_eq!(outcome.fuel_bonus, 400);
        assert_eq!(outcome.total_score(), tuning.perfect_landing + 400);
    }

    #[test]
    fn test_good_landing() {
        let tuning = Tuning::default();
        let state = touching_down(
            tuning.max_landing_velocity - EPS,
            tuning.max_landing_angle / 2.0,
            0.0,
        );
        let outcome = evaluate(&state, &pad(), &tuning);
        assert_eq!(outcome.grade, LandingGrade::Good);
        assert_eq!(outcome.score, tuning.good_landing);
        assert_eq!(outcome.fuel_bonus, 0);
    }

    #[test]
    fn test_too_fast_is_crash() {
        let tuning = Tuning::default();
        let state = touching_down(tuning.max_landing_velocity + EPS, 0.0, 80.0);
        let outcome = evaluate(&state, &pad(), &tuning);
        assert_eq!(outcome.grade, LandingGrade::Crashed);
        assert_eq!(outcome.total_score(), 0);
        assert!(!outcome.grade.is_success());
    }

    #[test]
    fn test_too_tilted_is_crash() {
        let tuning = Tuning::default();
        let state = touching_down(0.5, -(tuning.max_landing_angle + 1.0), 80.0);
        assert_eq!(
            evaluate(&state, &pad(), &tuning).grade,
            LandingGrade::Crashed
        );
    }

    #[test]
    fn test_off_pad_is_missed() {
        let tuning = Tuning::default();
        let mut state = touching_down(0.1, 0.0, 100.0);
        state.pos.x = 100.0;
        let outcome = evaluate(&state, &pad(), &tuning);
        assert_eq!(outcome.grade, LandingGrade::MissedPad);
        assert_eq!(outcome.total_score(), 0);
    }

    #[test]
    fn test_pad_edge_is_missed() {
        let tuning = Tuning::default();
        let mut state = touching_down(0.1, 0.0, 100.0);
        // Center exactly on the left edge: strict containment fails
        state.pos.x = pad().pad_x - tuning.rocket_width / 2.0;
        assert_eq!(
            evaluate(&state, &pad(), &tuning).grade,
            LandingGrade::MissedPad
        );
    }

    #[test]
    fn test_fuel_bonus_floors() {
        let tuning = Tuning::default();
        let state = touching_down(0.0, 0.0, 33.27);
        let outcome = evaluate(&state, &pad(), &tuning);
        assert_eq!(outcome.fuel_bonus, 332);
    }

    #[test]
    fn test_upward_drift_counts_as_slow() {
        // Moving up at contact is under every velocity threshold
        let tuning = Tuning::default();
        let state = touching_down(-0.5, 0.0, 10.0);
        assert_eq!(
            evaluate(&state, &pad(), &tuning).grade,
            LandingGrade::Perfect
        );
    }
}

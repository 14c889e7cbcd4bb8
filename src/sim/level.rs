//! Level progression and difficulty derivation
//!
//! Difficulty is a pure function of the level index: gravity climbs, the
//! pad narrows (to a floor), and the wind ceiling rises (applied in
//! [`super::wind::Wind::set_level`]). After the last level the counter
//! wraps to 1 and the curve restarts; `total_cleared` keeps counting.

use serde::{Deserialize, Serialize};

use crate::Tuning;

/// Per-level difficulty parameters and pad geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based level index
    pub level: u32,
    /// Downward acceleration per tick
    pub gravity: f32,
    pub pad_width: f32,
    /// Left edge of the pad
    pub pad_x: f32,
}

impl LevelConfig {
    /// Right edge of the pad
    #[inline]
    pub fn pad_right(&self) -> f32 {
        self.pad_x + self.pad_width
    }

    /// Strict horizontal containment test for a landing point
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x > self.pad_x && x < self.pad_right()
    }
}

/// Tracks the current level and derives its difficulty
#[derive(Debug, Clone)]
pub struct LevelProgression {
    level: u32,
    total_cleared: u32,
    level_count: u32,
    base_gravity: f32,
    gravity_step: f32,
    base_pad_width: f32,
    pad_width_step: f32,
    min_pad_width: f32,
}

impl LevelProgression {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            level: 1,
            total_cleared: 0,
            level_count: tuning.level_count,
            base_gravity: tuning.gravity,
            gravity_step: tuning.gravity_increase_per_level,
            base_pad_width: tuning.base_pad_width,
            pad_width_step: tuning.pad_width_decrease_per_level,
            min_pad_width: tuning.min_pad_width,
        }
    }

    /// Current 1-based level index
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Lifetime count of levels cleared, unaffected by the wrap
    pub fn total_cleared(&self) -> u32 {
        self.total_cleared
    }

    /// Derive this level's difficulty and pad geometry for a play width
    pub fn configure(&self, play_width: f32) -> LevelConfig {
        let steps = (self.level - 1) as f32;
        let gravity = self.base_gravity + steps * self.gravity_step;
        let pad_width = (self.base_pad_width - steps * self.pad_width_step)
            .max(self.min_pad_width);
        LevelConfig {
            level: self.level,
            gravity,
            pad_width,
            pad_x: play_width / 2.0 - pad_width / 2.0,
        }
    }

    /// Move to the next level, wrapping past the last back to 1
    pub fn advance(&mut self) {
        self.total_cleared += 1;
        if self.level < self.level_count {
            self.level += 1;
        } else {
            self.level = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_is_base_difficulty() {
        let tuning = Tuning::default();
        let config = LevelProgression::new(&tuning).configure(800.0);
        assert_eq!(config.level, 1);
        assert_eq!(config.gravity, tuning.gravity);
        assert_eq!(config.pad_width, tuning.base_pad_width);
    }

    #[test]
    fn test_difficulty_scales_with_level() {
        let tuning = Tuning::default();
        let mut progression = LevelProgression::new(&tuning);
        progression.advance();
        progression.advance();
        let config = progression.configure(800.0);
        assert_eq!(config.level, 3);
        assert!((config.gravity - (tuning.gravity + 2.0 * tuning.gravity_increase_per_level)).abs() < 1e-6);
        assert_eq!(
            config.pad_width,
            tuning.base_pad_width - 2.0 * tuning.pad_width_decrease_per_level
        );
    }

    #[test]
    fn test_pad_width_floor() {
        let mut tuning = Tuning::default();
        tuning.level_count = 20;
        let mut progression = LevelProgression::new(&tuning);
        for _ in 0..15 {
            progression.advance();
        }
        assert_eq!(progression.configure(800.0).pad_width, tuning.min_pad_width);
    }

    #[test]
    fn test_pad_centered() {
        let tuning = Tuning::default();
        let config = LevelProgression::new(&tuning).configure(640.0);
        assert_eq!(config.pad_x, 320.0 - config.pad_width / 2.0);
        assert_eq!(config.pad_right(), 320.0 + config.pad_width / 2.0);
    }

    #[test]
    fn test_wrap_resets_difficulty() {
        let tuning = Tuning::default();
        let mut progression = LevelProgression::new(&tuning);
        for _ in 0..tuning.level_count - 1 {
            progression.advance();
        }
        assert_eq!(progression.level(), tuning.level_count);

        progression.advance();
        assert_eq!(progression.level(), 1);
        assert_eq!(progression.total_cleared(), tuning.level_count);

        // Back at the base (unescalated) values
        let config = progression.configure(800.0);
        assert_eq!(config.gravity, tuning.gravity);
        assert_eq!(config.pad_width, tuning.base_pad_width);
    }

    #[test]
    fn test_containment_is_strict() {
        let tuning = Tuning::default();
        let config = LevelProgression::new(&tuning).configure(800.0);
        assert!(!config.contains_x(config.pad_x));
        assert!(!config.contains_x(config.pad_right()));
        assert!(config.contains_x(config.pad_x + 1.0));
        assert!(config.contains_x(400.0));
    }
}

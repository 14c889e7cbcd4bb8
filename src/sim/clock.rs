//! Fixed-step simulation clock
//!
//! The orchestrator: one `step()` per frame pulls wind, advances the
//! rocket, tests for the ground crossing, and on touchdown routes the
//! terminal state through the landing evaluator and the score ledger
//! exactly once. An external scheduler paces the calls; nothing here
//! blocks or yields.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::scores::{self, PlayerRecord, ScoreLedger};

use super::landing::{self, LandingOutcome};
use super::level::{LevelConfig, LevelProgression};
use super::rocket::{Rocket, RocketState};
use super::wind::{Wind, WindDirection, WindState};

/// Decorrelates the clock's particle rolls from the wind's sampling
const PARTICLE_RNG_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Play area used before the first `start()` supplies real dimensions
const DEFAULT_PLAY_AREA: Vec2 = Vec2::new(800.0, 600.0);

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockPhase {
    /// No attempt in flight
    Idle,
    /// Ticking; the caller schedules the next `step()`
    Running,
    /// Terminal state reached and scored; awaiting `start()`
    Landed,
}

/// Control state polled once per tick
///
/// `thrust` is level-triggered (held); the rotate flags are edge-triggered
/// and apply one rotation step each.
#[derive(Debug, Clone, Default)]
pub struct ControlInput {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// Events for the presentation layer, drained via
/// [`SimulationClock::take_events`]. Advisory only; consuming or dropping
/// them never changes simulation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A level (re)configured its pad; re-render it
    LevelConfigured(LevelConfig),
    /// The burning engine suggests an exhaust particle here
    ThrustPlume { pos: Vec2, angle: f32 },
    /// The wind suggests a drifting particle
    WindParticle {
        direction: WindDirection,
        strength: f32,
    },
    /// The attempt resolved; fired exactly once per attempt
    AttemptResolved(LandingOutcome),
}

/// Drives the per-tick pipeline: wind → dynamics → collision test →
/// evaluation → score update.
pub struct SimulationClock {
    tuning: Tuning,
    phase: ClockPhase,
    rocket: Rocket,
    wind: Wind,
    progression: LevelProgression,
    level_config: LevelConfig,
    ledger: ScoreLedger,
    player: String,
    play_area: Vec2,
    tick_count: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
    last_outcome: Option<LandingOutcome>,
}

impl SimulationClock {
    /// Build a clock for one player session. The seed fixes the wind
    /// schedule and particle rolls; identical seeds and inputs replay
    /// identically.
    pub fn new(tuning: Tuning, player: impl Into<String>, seed: u64) -> Self {
        let progression = LevelProgression::new(&tuning);
        let level_config = progression.configure(DEFAULT_PLAY_AREA.x);
        Self {
            rocket: Rocket::new(&tuning),
            wind: Wind::new(&tuning, progression.level(), seed),
            progression,
            level_config,
            ledger: ScoreLedger::new(),
            player: player.into(),
            play_area: DEFAULT_PLAY_AREA,
            tick_count: 0,
            rng: Pcg32::seed_from_u64(seed ^ PARTICLE_RNG_SALT),
            events: Vec::new(),
            last_outcome: None,
            phase: ClockPhase::Idle,
            tuning,
        }
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Per-tick rocket snapshot for the HUD/renderer
    pub fn rocket_state(&self) -> RocketState {
        *self.rocket.state()
    }

    /// Per-tick wind snapshot for the HUD and particle decisions
    pub fn wind_state(&self) -> WindState {
        self.wind.state()
    }

    /// Active level parameters and pad geometry
    pub fn level_config(&self) -> LevelConfig {
        self.level_config
    }

    pub fn progression(&self) -> &LevelProgression {
        &self.progression
    }

    /// Outcome of the most recent attempt, if one has resolved
    pub fn last_outcome(&self) -> Option<LandingOutcome> {
        self.last_outcome
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Begin an attempt: configure the level for the play area, reset the
    /// wind ceiling and the rocket, and start ticking.
    pub fn start(&mut self, play_width: f32, play_height: f32) {
        self.play_area = Vec2::new(play_width, play_height);
        self.level_config = self.progression.configure(play_width);
        self.wind.set_level(self.progression.level());
        self.rocket.reset(play_width);
        self.last_outcome = None;
        self.phase = ClockPhase::Running;
        self.events.push(GameEvent::LevelConfigured(self.level_config));
        log::info!(
            "level {} started: gravity {:.3}, pad {:.0}px at x {:.0}",
            self.level_config.level,
            self.level_config.gravity,
            self.level_config.pad_width,
            self.level_config.pad_x,
        );
    }

    /// Halt mid-attempt. Safe at any point: every tick replaces the
    /// rocket state atomically, so there is no partial write to lose.
    pub fn stop(&mut self) {
        self.phase = ClockPhase::Idle;
    }

    /// Move to the next level after a successful attempt. The caller
    /// follows with `start()` to fly it.
    pub fn advance_level(&mut self) {
        self.progression.advance();
        log::info!(
            "advancing to level {} ({} cleared total)",
            self.progression.level(),
            self.progression.total_cleared(),
        );
    }

    /// Apply new play-area dimensions, re-deriving the pad and keeping
    /// the rocket inside the bounds.
    pub fn set_play_area(&mut self, play_width: f32, play_height: f32) {
        self.play_area = Vec2::new(play_width, play_height);
        self.level_config = self.progression.configure(play_width);
        self.rocket.clamp_to_width(play_width);
        self.events.push(GameEvent::LevelConfigured(self.level_config));
    }

    /// Merge a remote leaderboard snapshot, applied only between attempts
    /// so a slow or failing sync can never perturb a flight. Returns
    /// whether the merge was applied.
    pub fn merge_remote(&mut self, remote: &[PlayerRecord]) -> bool {
        if self.phase == ClockPhase::Running {
            log::debug!("deferring leaderboard merge: attempt in flight");
            return false;
        }
        self.ledger.merge(remote);
        true
    }

    /// Drain the events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the simulation one tick. Returns the landing outcome on
    /// the tick the rocket crosses the ground line, `None` otherwise
    /// (including when not running).
    pub fn step(&mut self, input: &ControlInput) -> Option<LandingOutcome> {
        if self.phase != ClockPhase::Running {
            return None;
        }

        // Commands are applied before dynamics so a rotate issued this
        // frame shapes this frame's thrust vector.
        self.rocket.set_thrusting(input.thrust);
        if input.rotate_left {
            self.rocket.rotate_left();
        }
        if input.rotate_right {
            self.rocket.rotate_right();
        }

        let wind = self.wind.advance();
        if self.wind.particle_roll() {
            self.events.push(GameEvent::WindParticle {
                direction: wind.direction,
                strength: wind.strength,
            });
        }

        let state = self.rocket.tick(
            self.level_config.gravity,
            wind.strength,
            wind.direction,
            self.play_area.x,
        );

        if state.thrusting && state.fuel > 0.0 && self.rng.random_bool(0.5) {
            self.events.push(GameEvent::ThrustPlume {
                pos: state.pos,
                angle: state.angle,
            });
        }

        self.tick_count += 1;

        if state.pos.y > self.play_area.y - self.tuning.ground_offset {
            let outcome = landing::evaluate(&state, &self.level_config, &self.tuning);
            self.phase = ClockPhase::Landed;
            self.last_outcome = Some(outcome);
            self.ledger
                .record_attempt(&self.player, &outcome, scores::now_ms());
            self.events.push(GameEvent::AttemptResolved(outcome));
            log::info!(
                "attempt resolved: {:?}, vy {:.2}, angle {:.1}, +{} points",
                outcome.grade,
                state.vel.y,
                state.angle,
                outcome.total_score(),
            );
            return Some(outcome);
        }

        None
    }
}

//! Touchdown headless demo
//!
//! Drives the simulation clock without a renderer: a crude autopilot
//! brakes on thrust when falling too fast, flies a few attempts, and
//! prints the resulting ledger. Useful for eyeballing balance changes
//! with `RUST_LOG=info cargo run`.

use touchdown::Tuning;
use touchdown::sim::{ClockPhase, ControlInput, GameEvent, SimulationClock};

const PLAY_WIDTH: f32 = 800.0;
const PLAY_HEIGHT: f32 = 600.0;
const ATTEMPTS: u32 = 3;

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut clock = SimulationClock::new(Tuning::default(), "pilot", seed);

    for attempt in 1..=ATTEMPTS {
        clock.start(PLAY_WIDTH, PLAY_HEIGHT);
        log::info!("attempt {attempt} on level {}", clock.level_config().level);

        let outcome = loop {
            // Brake when descending faster than half the safe limit.
            let input = ControlInput {
                thrust: clock.rocket_state().vel.y > 1.0,
                ..Default::default()
            };

            let resolved = clock.step(&input);

            for event in clock.take_events() {
                if let GameEvent::WindParticle {
                    direction,
                    strength,
                } = event
                {
                    log::debug!("wind particle: {direction:?} at {strength:.3}");
                }
            }

            if clock.tick_count().is_multiple_of(120) {
                let state = clock.rocket_state();
                let wind = clock.wind_state();
                log::info!(
                    "t={} y={:.0} vy={:.2} fuel={:.0} wind={:.3}",
                    clock.tick_count(),
                    state.pos.y,
                    state.vel.y,
                    state.fuel,
                    wind.velocity_delta(),
                );
            }

            if let Some(outcome) = resolved {
                break outcome;
            }
        };

        log::info!(
            "attempt {attempt}: {:?} for {} points ({} fuel bonus)",
            outcome.grade,
            outcome.total_score(),
            outcome.fuel_bonus,
        );

        if outcome.grade.is_success() {
            clock.advance_level();
        }
        debug_assert_eq!(clock.phase(), ClockPhase::Landed);
    }

    println!("session score: {}", clock.ledger().session_score());
    for (rank, record) in clock.ledger().players().iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>8} pts, {} landings",
            rank + 1,
            record.name,
            record.score,
            record.landing_count,
        );
    }
}

//! Player score ledger
//!
//! Tracks per-player cumulative score and successful-landing counts,
//! rank-ordered, plus the session total. Remote leaderboard snapshots are
//! reconciled with a monotonic merge: fields only ever go up, so a stale
//! or partial snapshot can never regress anyone. Persistence is a plain
//! JSON file; any load/save failure degrades to keeping local state.

use serde::{Deserialize, Serialize};

use crate::sim::LandingOutcome;

/// One player's standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name; uniqueness is case-insensitive
    pub name: String,
    pub score: u64,
    /// Successful (perfect or good) landings
    pub landing_count: u32,
    /// Unix timestamp (ms) of the last recorded attempt
    pub last_played: f64,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, score: u64, landing_count: u32, last_played: f64) -> Self {
        Self {
            name: name.into(),
            score,
            landing_count,
            last_played,
        }
    }
}

/// Rank-ordered player collection plus the running session total
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreLedger {
    players: Vec<PlayerRecord>,
    session_score: u64,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score accumulated across all attempts this session
    pub fn session_score(&self) -> u64 {
        self.session_score
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All records, best score first
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Top `n` records, best first
    pub fn top(&self, n: usize) -> &[PlayerRecord] {
        &self.players[..self.players.len().min(n)]
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// 1-indexed rank of a player, best score first
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.players
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .map(|i| i + 1)
    }

    /// Record one resolved attempt for a player, creating their record on
    /// first sight. Crashes contribute zero points and no landing count
    /// but still stamp `last_played`.
    pub fn record_attempt(&mut self, name: &str, outcome: &LandingOutcome, timestamp: f64) {
        let delta = outcome.total_score() as u64;
        self.session_score += delta;

        match self
            .players
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            Some(record) => {
                record.score += delta;
                if outcome.grade.is_success() {
                    record.landing_count += 1;
                }
                record.last_played = timestamp;
            }
            None => {
                self.players.push(PlayerRecord::new(
                    name,
                    delta,
                    outcome.grade.is_success() as u32,
                    timestamp,
                ));
            }
        }
        self.sort();
    }

    /// Reconcile a remote snapshot. For a known name (case-insensitive)
    /// every field takes the maximum of the two sides; unknown names are
    /// inserted verbatim. Commutative and idempotent: merging the same
    /// snapshot twice changes nothing.
    pub fn merge(&mut self, remote: &[PlayerRecord]) {
        for incoming in remote {
            match self
                .players
                .iter_mut()
                .find(|p| p.name.eq_ignore_ascii_case(&incoming.name))
            {
                Some(local) => {
                    local.score = local.score.max(incoming.score);
                    local.landing_count = local.landing_count.max(incoming.landing_count);
                    local.last_played = local.last_played.max(incoming.last_played);
                }
                None => self.players.push(incoming.clone()),
            }
        }
        self.sort();
        log::debug!("merged {} remote records, {} total", remote.len(), self.players.len());
    }

    /// Stable descending sort; equal scores keep their insertion order
    fn sort(&mut self) {
        self.players.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn to_json(&self) -> String {
        // Serializing a plain struct of numbers and strings cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(mut ledger) => {
                ledger.sort();
                Some(ledger)
            }
            Err(e) => {
                log::warn!("Failed to parse ledger JSON: {e}");
                None
            }
        }
    }

    /// Load a ledger from disk, starting fresh when the file is missing
    /// or corrupt. Never an error the simulation has to see.
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Some(ledger) => {
                    log::info!("Loaded {} player records", ledger.players.len());
                    ledger
                }
                None => Self::new(),
            },
            Err(_) => {
                log::info!("No ledger at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Save to disk; failures are logged and local state stays the truth
    pub fn save(&self, path: &std::path::Path) {
        if let Err(e) = std::fs::write(path, self.to_json()) {
            log::warn!("Failed to save ledger to {}: {e}", path.display());
        }
    }
}

/// Current unix time in milliseconds, the ledger's timestamp unit
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

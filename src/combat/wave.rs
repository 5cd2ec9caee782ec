use std::fmt;

use super::format::{fixed, plain};
use super::models::{time_to_kill, Striker};

/// Waves cleared faster than this many seconds feel trivial.
const MIN_CLEAR_SECONDS: f64 = 5.0;
/// Waves that take longer than this many seconds drag on.
const MAX_CLEAR_SECONDS: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    TooEasy,
    TooHard,
    Balanced,
}

impl Pacing {
    pub fn classify(clear_time: f64) -> Self {
        if clear_time < MIN_CLEAR_SECONDS {
            Pacing::TooEasy
        } else if clear_time > MAX_CLEAR_SECONDS {
            Pacing::TooHard
        } else {
            Pacing::Balanced
        }
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Pacing::TooEasy => "⚠️ Too easy — consider increasing HP or number of enemies.",
            Pacing::TooHard => "⚠️ Too hard — may frustrate players.",
            Pacing::Balanced => "✅ Balanced pacing for this wave.",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveReport {
    pub player_dps: f64,
    pub total_wave_hp: f64,
    pub clear_time: f64,
    pub pacing: Pacing,
}

impl fmt::Display for WaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🧠 Suggested Wave Timing:")?;
        writeln!(f, "- Player DPS: {}", fixed(self.player_dps, 2))?;
        writeln!(f, "- Total wave HP: {}", plain(self.total_wave_hp))?;
        writeln!(f, "- Time to clear: ~{} seconds", fixed(self.clear_time, 1))?;
        write!(f, "{}", self.pacing)
    }
}

pub fn suggest_wave_timing(player: &Striker, enemy_hp: f64, enemies_per_wave: f64) -> WaveReport {
    let player_dps = player.dps();
    let total_wave_hp = enemy_hp * enemies_per_wave;
    let clear_time = time_to_kill(player_dps, total_wave_hp);

    WaveReport {
        player_dps,
        total_wave_hp,
        clear_time,
        pacing: Pacing::classify(clear_time),
    }
}

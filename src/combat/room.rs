use std::fmt;

use super::format::{fixed, plain};
use super::models::{time_to_kill, CombatantStats};

/// Survival must exceed clear time by this factor to be considered safe.
const SAFETY_MARGIN: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn classify(survival_time: f64, clear_time: f64) -> Self {
        if survival_time < clear_time {
            RiskLevel::High
        } else if survival_time < clear_time * SAFETY_MARGIN {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RiskLevel::High => "🔴 HIGH risk — player may die before clearing the room.",
            RiskLevel::Medium => "🟠 MEDIUM risk — room is tough, but possible.",
            RiskLevel::Low => "🟢 LOW risk — player should clear the room comfortably.",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomReport {
    pub player_dps: f64,
    pub total_enemy_hp: f64,
    pub clear_time: f64,
    pub total_enemy_dps: f64,
    /// Seconds the player lasts with every enemy attacking at once
    pub survival_time: f64,
    pub risk: RiskLevel,
}

impl fmt::Display for RoomReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🧠 Simulation Result:")?;
        writeln!(f, "- Player DPS: {}", fixed(self.player_dps, 2))?;
        writeln!(f, "- Total Enemy HP: {}", plain(self.total_enemy_hp))?;
        writeln!(
            f,
            "- Estimated Time to Clear Room: {}s",
            fixed(self.clear_time, 2)
        )?;
        writeln!(
            f,
            "- Estimated Time to Die (under full pressure): {}s",
            fixed(self.survival_time, 2)
        )?;
        write!(f, "- Risk Assessment: {}", self.risk)
    }
}

/// Pits one player against a room of simultaneously active enemies.
pub fn simulate_room(player: &CombatantStats, enemies: &[CombatantStats]) -> RoomReport {
    let player_dps = player.dps();
    let total_enemy_hp: f64 = enemies.iter().map(|enemy| enemy.hp).sum();
    let clear_time = time_to_kill(player_dps, total_enemy_hp);

    let total_enemy_dps: f64 = enemies.iter().map(CombatantStats::dps).sum();
    let survival_time = time_to_kill(total_enemy_dps, player.hp);

    RoomReport {
        player_dps,
        total_enemy_hp,
        clear_time,
        total_enemy_dps,
        survival_time,
        risk: RiskLevel::classify(survival_time, clear_time),
    }
}

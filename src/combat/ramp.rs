use std::fmt;

use super::format::{fixed, plain};
use super::models::{time_to_kill, LevelDescriptor, Striker};

/// Largest TTK change between consecutive levels, in seconds, that still feels smooth.
const SMOOTH_DELTA_SECONDS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampTransition {
    SteepIncrease,
    SuddenDrop,
    Smooth,
}

impl RampTransition {
    pub fn classify(delta: f64) -> Self {
        if delta > SMOOTH_DELTA_SECONDS {
            RampTransition::SteepIncrease
        } else if delta < -SMOOTH_DELTA_SECONDS {
            RampTransition::SuddenDrop
        } else {
            RampTransition::Smooth
        }
    }
}

impl fmt::Display for RampTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RampTransition::SteepIncrease => "⬆️ Steep increase",
            RampTransition::SuddenDrop => "⬇️ Sudden drop (might feel too easy)",
            RampTransition::Smooth => "➡️ Smooth transition",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RampStep {
    pub name: String,
    pub enemy_hp: f64,
    pub ttk: f64,
    /// None for the first level
    pub transition: Option<RampTransition>,
}

impl fmt::Display for RampStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = self
            .transition
            .map(|transition| transition.to_string())
            .unwrap_or_default();
        write!(
            f,
            "- {}: Avg Enemy HP = {}, TTK = {}s {}",
            self.name,
            plain(self.enemy_hp),
            fixed(self.ttk, 2),
            verdict
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RampReport {
    pub steps: Vec<RampStep>,
}

impl fmt::Display for RampReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📈 Difficulty Ramp Analysis:")?;
        for step in &self.steps {
            write!(f, "\n{}", step)?;
        }
        Ok(())
    }
}

/// Time-to-kill per level for a fixed player, compared level over level.
pub fn analyze_ramp(levels: &[LevelDescriptor], player: &Striker) -> RampReport {
    let player_dps = player.dps();
    let mut previous_ttk: Option<f64> = None;

    let steps = levels
        .iter()
        .map(|level| {
            let ttk = time_to_kill(player_dps, level.enemy_hp);
            let transition = previous_ttk.map(|previous| RampTransition::classify(ttk - previous));
            previous_ttk = Some(ttk);

            RampStep {
                name: level.name.clone(),
                enemy_hp: level.enemy_hp,
                ttk,
                transition,
            }
        })
        .collect();

    RampReport { steps }
}

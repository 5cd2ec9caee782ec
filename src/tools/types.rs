use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::combat::{
    BruteStats, CombatantStats, EnemyHp, LevelDescriptor, SkillDescriptor, Striker,
};

/// Every tool the server exposes, in listing order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    SuggestBalancing,
    PredictPerformanceImpact,
    SuggestAiStateMachine,
    SimulateCombat,
    SimulateRoomSurvivalTime,
    SuggestWaveTiming,
    SimulateSkillImpact,
    SuggestDifficultyRamp,
}

/// Entry returned by a tool listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Constraints serde can't express, checked after deserialisation
pub trait Validate {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestBalancingInput {
    pub player: BruteStats,
    pub enemy: BruteStats,
}

impl Validate for SuggestBalancingInput {}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictPerformanceImpactInput {
    pub code: String,
}

impl Validate for PredictPerformanceImpactInput {}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestAiStateMachineInput {
    pub description: String,
}

impl Validate for SuggestAiStateMachineInput {}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateCombatInput {
    pub player: CombatantStats,
    pub enemy: CombatantStats,
}

impl Validate for SimulateCombatInput {}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRoomSurvivalTimeInput {
    pub player: CombatantStats,
    pub enemies: Vec<CombatantStats>,
}

impl Validate for SimulateRoomSurvivalTimeInput {
    fn validate(&self) -> Result<(), String> {
        if self.enemies.is_empty() {
            return Err("`enemies` must contain at least 1 element".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestWaveTimingInput {
    pub player: Striker,
    pub enemy_hp: f64,
    pub enemies_per_wave: f64,
}

impl Validate for SuggestWaveTimingInput {}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateSkillImpactInput {
    pub skill: SkillDescriptor,
    pub enemies: Vec<EnemyHp>,
}

impl Validate for SimulateSkillImpactInput {
    fn validate(&self) -> Result<(), String> {
        if self.enemies.is_empty() {
            return Err("`enemies` must contain at least 1 element".to_string());
        }
        if self.skill.area == 0 {
            return Err("`skill.area` must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestDifficultyRampInput {
    pub levels: Vec<LevelDescriptor>,
    pub player: Striker,
}

impl Validate for SuggestDifficultyRampInput {
    fn validate(&self) -> Result<(), String> {
        if self.levels.len() < 2 {
            return Err("`levels` must contain at least 2 elements".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tool_names_use_snake_case() {
        assert_eq!(ToolName::SuggestAiStateMachine.as_ref(), "suggest_ai_state_machine");
        assert_eq!(
            ToolName::from_str("simulate_room_survival_time").unwrap(),
            ToolName::SimulateRoomSurvivalTime
        );
        assert!(ToolName::from_str("SimulateCombat").is_err());
        assert_eq!(ToolName::iter().count(), 8);
    }

    #[test]
    fn wave_input_uses_camel_case() {
        let input: SuggestWaveTimingInput = serde_json::from_str(
            r#"{"player": {"damage": 5, "attackSpeed": 1}, "enemyHp": 100, "enemiesPerWave": 1}"#,
        )
        .unwrap();
        assert_eq!(input.enemy_hp, 100.0);
        assert_eq!(input.enemies_per_wave, 1.0);
    }

    #[test]
    fn ramp_needs_two_levels() {
        let input = SuggestDifficultyRampInput {
            levels: vec![LevelDescriptor {
                name: "solo".to_string(),
                enemy_hp: 10.0,
            }],
            player: Striker::new(1.0, 1.0),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn skill_area_must_be_positive() {
        let input = SimulateSkillImpactInput {
            skill: SkillDescriptor {
                damage: 1.0,
                cooldown: 1.0,
                area: 0,
            },
            enemies: vec![EnemyHp { hp: 1.0 }],
        };
        assert_eq!(input.validate().unwrap_err(), "`skill.area` must be at least 1");
    }
}

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::errors::ToolError;
use super::schema::input_schema;
use super::types::*;
use crate::analysis::{BehaviorRules, PerformanceRules};
use crate::combat::{
    analyze_ramp, evaluate_matchups, simulate_room, simulate_skill, suggest_balancing,
    suggest_wave_timing, Named, NamedCombatant,
};

/// A single named tool: parses its own arguments and produces the reply text
pub trait ToolHandler: Send + Sync {
    fn name(&self) -> ToolName;

    fn description(&self) -> &'static str;

    fn input_schema(&self) -> Value {
        input_schema(self.name())
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError>;

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Deserialises and validates `arguments` for `tool`.
pub fn parse_arguments<T>(tool: ToolName, arguments: Value) -> Result<T, ToolError>
where
    T: DeserializeOwned + Validate,
{
    let input: T = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(tool.to_string(), e.to_string()))?;
    input
        .validate()
        .map_err(|message| ToolError::invalid_arguments(tool.to_string(), message))?;
    Ok(input)
}

pub struct SuggestBalancing;

impl ToolHandler for SuggestBalancing {
    fn name(&self) -> ToolName {
        ToolName::SuggestBalancing
    }

    fn description(&self) -> &'static str {
        "Analyze stats and suggest balancing adjustments"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SuggestBalancingInput = parse_arguments(self.name(), arguments)?;
        let entities = [
            Named::new("player", input.player),
            Named::new("enemy", input.enemy),
        ];
        Ok(suggest_balancing(&entities).to_string())
    }
}

pub struct PredictPerformanceImpact {
    rules: Arc<PerformanceRules>,
}

impl PredictPerformanceImpact {
    pub fn new(rules: Arc<PerformanceRules>) -> Self {
        Self { rules }
    }
}

impl ToolHandler for PredictPerformanceImpact {
    fn name(&self) -> ToolName {
        ToolName::PredictPerformanceImpact
    }

    fn description(&self) -> &'static str {
        "Analyze a code snippet and warn about potential performance issues"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: PredictPerformanceImpactInput = parse_arguments(self.name(), arguments)?;
        Ok(self.rules.predict(&input.code))
    }
}

pub struct SuggestAiStateMachine {
    rules: Arc<BehaviorRules>,
}

impl SuggestAiStateMachine {
    pub fn new(rules: Arc<BehaviorRules>) -> Self {
        Self { rules }
    }
}

impl ToolHandler for SuggestAiStateMachine {
    fn name(&self) -> ToolName {
        ToolName::SuggestAiStateMachine
    }

    fn description(&self) -> &'static str {
        "Generates an AI state machine from a behavior description"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SuggestAiStateMachineInput = parse_arguments(self.name(), arguments)?;
        Ok(self.rules.describe(&input.description))
    }
}

pub struct SimulateCombat;

impl ToolHandler for SimulateCombat {
    fn name(&self) -> ToolName {
        ToolName::SimulateCombat
    }

    fn description(&self) -> &'static str {
        "Simulate a fight between entities and calculate time to kill"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SimulateCombatInput = parse_arguments(self.name(), arguments)?;
        let entities = [
            NamedCombatant::new("player", input.player),
            NamedCombatant::new("enemy", input.enemy),
        ];
        Ok(evaluate_matchups(&entities).to_string())
    }
}

pub struct SimulateRoomSurvivalTime;

impl ToolHandler for SimulateRoomSurvivalTime {
    fn name(&self) -> ToolName {
        ToolName::SimulateRoomSurvivalTime
    }

    fn description(&self) -> &'static str {
        "Estimate how long the player survives vs a group of enemies"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SimulateRoomSurvivalTimeInput = parse_arguments(self.name(), arguments)?;
        Ok(simulate_room(&input.player, &input.enemies).to_string())
    }
}

pub struct SuggestWaveTiming;

impl ToolHandler for SuggestWaveTiming {
    fn name(&self) -> ToolName {
        ToolName::SuggestWaveTiming
    }

    fn description(&self) -> &'static str {
        "Suggests time between enemy waves based on player DPS"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SuggestWaveTimingInput = parse_arguments(self.name(), arguments)?;
        Ok(suggest_wave_timing(&input.player, input.enemy_hp, input.enemies_per_wave).to_string())
    }
}

pub struct SimulateSkillImpact;

impl ToolHandler for SimulateSkillImpact {
    fn name(&self) -> ToolName {
        ToolName::SimulateSkillImpact
    }

    fn description(&self) -> &'static str {
        "Simulates how effective a skill is based on damage and enemy HP"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SimulateSkillImpactInput = parse_arguments(self.name(), arguments)?;
        Ok(simulate_skill(&input.skill, &input.enemies).to_string())
    }
}

pub struct SuggestDifficultyRamp;

impl ToolHandler for SuggestDifficultyRamp {
    fn name(&self) -> ToolName {
        ToolName::SuggestDifficultyRamp
    }

    fn description(&self) -> &'static str {
        "Analyzes if difficulty progression between levels is well balanced"
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let input: SuggestDifficultyRampInput = parse_arguments(self.name(), arguments)?;
        Ok(analyze_ramp(&input.levels, &input.player).to_string())
    }
}

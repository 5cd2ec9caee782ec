use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{debug, error, info, instrument, warn};

use super::errors::ToolError;
use super::handlers::*;
use super::types::{ToolDescriptor, ToolName};
use crate::analysis::{AnalysisError, BehaviorRules, PerformanceRules};

/// Resolves tool names to handlers and runs calls in isolation
///
/// Each call runs on a blocking task, so a handler that panics fails only
/// its own call.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// All eight game-helper tools with the standard rule tables.
    pub fn standard() -> Result<Self, AnalysisError> {
        let performance_rules = Arc::new(PerformanceRules::standard()?);
        let behavior_rules = Arc::new(BehaviorRules::standard()?);

        let mut registry = Self::new();
        registry.add_handler(Arc::new(SuggestBalancing));
        registry.add_handler(Arc::new(PredictPerformanceImpact::new(performance_rules)));
        registry.add_handler(Arc::new(SuggestAiStateMachine::new(behavior_rules)));
        registry.add_handler(Arc::new(SimulateCombat));
        registry.add_handler(Arc::new(SimulateRoomSurvivalTime));
        registry.add_handler(Arc::new(SuggestWaveTiming));
        registry.add_handler(Arc::new(SimulateSkillImpact));
        registry.add_handler(Arc::new(SuggestDifficultyRamp));
        Ok(registry)
    }

    /// Registers `handler`, replacing any handler already bound to the same name.
    pub fn add_handler(&mut self, handler: Arc<dyn ToolHandler>) {
        debug!(tool = %handler.name(), "Registering tool handler");
        self.handlers.retain(|existing| existing.name() != handler.name());
        self.handlers.push(handler);
    }

    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.handlers.iter().map(|handler| handler.descriptor()).collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        let tool = ToolName::from_str(name).ok()?;
        self.handlers
            .iter()
            .find(|handler| handler.name() == tool)
            .cloned()
    }

    #[instrument(name = "call_tool", skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        let handler = self.get(name).ok_or_else(|| {
            warn!(tool = %name, "Unknown tool requested");
            ToolError::UnknownTool(name.to_string())
        })?;

        let result = tokio::task::spawn_blocking(move || handler.call(arguments))
            .await
            .map_err(|e| {
                error!(tool = %name, error = %e, "Tool handler panicked");
                ToolError::Internal(join_failure_message(name, e))
            })?;

        match &result {
            Ok(text) => info!(tool = %name, reply_length = text.len(), "Tool call succeeded"),
            Err(e) => warn!(tool = %name, error = %e, "Tool call failed"),
        }

        result
    }
}

/// Message carried by a panic payload, falling back to a generic note
fn join_failure_message(name: &str, error: JoinError) -> String {
    if !error.is_panic() {
        return format!("{} was cancelled", name);
    }

    let payload = error.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        format!("{} failed unexpectedly", name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

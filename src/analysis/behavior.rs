use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::AnalysisError;

const HEADER: &str = "🧠 AI State Machine Suggestion";

const NOTHING_EXTRACTED: &str =
    "⚠️ Couldn't extract any behavior from the description. Try being more specific.";

/// A keyword pattern and the state-machine fragment it contributes.
#[derive(Debug, Clone)]
pub struct BehaviorRule {
    pattern: Regex,
    /// Event that moves the machine into `state`, if any
    pub trigger: Option<String>,
    pub state: String,
}

impl BehaviorRule {
    /// `keywords` is matched case-insensitively.
    pub fn new(
        keywords: &str,
        trigger: Option<&str>,
        state: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        let pattern = RegexBuilder::new(keywords).case_insensitive(true).build()?;

        Ok(Self {
            pattern,
            trigger: trigger.map(str::to_string),
            state: state.into(),
        })
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(trigger) = &self.trigger {
            lines.push(format!("🔸 Transition: {} → {}", trigger, self.state));
        }
        lines.push(format!("🔹 State: {}", self.state));
        lines
    }
}

#[derive(Debug, Clone)]
pub struct BehaviorRules {
    rules: Vec<BehaviorRule>,
}

impl BehaviorRules {
    pub fn new(rules: Vec<BehaviorRule>) -> Self {
        Self { rules }
    }

    /// Patrol, chase on sight, attack in range, return when the target is lost.
    pub fn standard() -> Result<Self, AnalysisError> {
        Ok(Self::new(vec![
            BehaviorRule::new(r"patrol", None, "Patrol")?,
            BehaviorRule::new(r"see|detect|spot", Some("onPlayerSeen"), "Chase")?,
            BehaviorRule::new(r"attack|shoot|hit", Some("onPlayerInRange"), "Attack")?,
            BehaviorRule::new(
                r"lost|disappear|no longer see",
                Some("onPlayerLost"),
                "ReturnToPatrol",
            )?,
        ]))
    }

    /// States reached by the description, in table order.
    pub fn extract<'a>(&'a self, description: &str) -> Vec<&'a BehaviorRule> {
        self.rules
            .iter()
            .filter(|rule| rule.pattern.is_match(description))
            .collect()
    }

    pub fn describe(&self, description: &str) -> String {
        let matched = self.extract(description);
        debug!(state_count = matched.len(), "Extracted behavior states");

        if matched.is_empty() {
            return NOTHING_EXTRACTED.to_string();
        }

        let mut lines = vec![format!("{}\n", HEADER)];
        lines.extend(matched.iter().flat_map(|rule| rule.lines()));
        lines.join("\n")
    }
}

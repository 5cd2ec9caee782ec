use regex::Regex;
use tracing::debug;

use super::AnalysisError;
use crate::combat::format::plain;

const ITERATIONS_PLACEHOLDER: &str = "{iterations}";

const NO_ISSUES: &str = "✅ No obvious performance issues detected in the provided snippet.";

/// How a rule decides whether it fires
#[derive(Debug, Clone)]
pub enum Detector {
    /// Fires when the pattern appears anywhere
    Matches(Regex),
    /// Fires when every pattern appears somewhere, in any order
    AllOf(Vec<Regex>),
    /// Fires when a zero-based counted loop has a literal bound above `threshold`.
    /// `shape` recognises the loop header, `bound` captures the bound in group 1.
    CountedLoop {
        shape: Regex,
        bound: Regex,
        threshold: f64,
    },
}

#[derive(Debug, Clone)]
pub struct PerformanceRule {
    pub detector: Detector,
    /// Warning text; `{iterations}` is replaced with the loop bound for counted loops
    pub message: String,
}

impl PerformanceRule {
    pub fn matches(pattern: &str, message: impl Into<String>) -> Result<Self, AnalysisError> {
        Ok(Self {
            detector: Detector::Matches(Regex::new(pattern)?),
            message: message.into(),
        })
    }

    pub fn all_of(patterns: &[&str], message: impl Into<String>) -> Result<Self, AnalysisError> {
        let regexes = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            detector: Detector::AllOf(regexes),
            message: message.into(),
        })
    }

    pub fn counted_loop(
        shape: &str,
        bound: &str,
        threshold: f64,
        message: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            detector: Detector::CountedLoop {
                shape: Regex::new(shape)?,
                bound: Regex::new(bound)?,
                threshold,
            },
            message: message.into(),
        })
    }

    /// Returns the warning line if the rule fires on `code`.
    pub fn check(&self, code: &str) -> Option<String> {
        match &self.detector {
            Detector::Matches(pattern) => pattern.is_match(code).then(|| self.message.clone()),
            Detector::AllOf(patterns) => patterns
                .iter()
                .all(|pattern| pattern.is_match(code))
                .then(|| self.message.clone()),
            Detector::CountedLoop {
                shape,
                bound,
                threshold,
            } => {
                if !shape.is_match(code) {
                    return None;
                }
                let iterations = bound
                    .captures(code)
                    .and_then(|captures| captures.get(1))
                    .and_then(|digits| digits.as_str().parse::<f64>().ok())
                    .unwrap_or(0.0);

                (iterations > *threshold).then(|| {
                    self.message
                        .replace(ITERATIONS_PLACEHOLDER, &plain(iterations))
                })
            }
        }
    }
}

/// Ordered table of lexical performance heuristics.
///
/// Rules are independent; output order follows table order, not where the
/// match sits in the snippet.
#[derive(Debug, Clone)]
pub struct PerformanceRules {
    rules: Vec<PerformanceRule>,
}

impl PerformanceRules {
    pub fn new(rules: Vec<PerformanceRule>) -> Self {
        Self { rules }
    }

    /// Frame-drop loops, timers, spawning in loops and hot-loop randomness.
    pub fn standard() -> Result<Self, AnalysisError> {
        Ok(Self::new(vec![
            PerformanceRule::counted_loop(
                r"for\s*\(\s*let\s+\w+\s*=\s*0\s*;\s*\w+\s*<\s*([0-9]+)",
                r"for\s*\(.*<\s*([0-9]+)\s*;.*\)",
                1000.0,
                "⚠️ Detected loop with {iterations} iterations — may cause frame drops.",
            )?,
            PerformanceRule::matches(
                r"setTimeout|setInterval",
                "⚠️ Usage of setTimeout or setInterval — may introduce performance instability if not cleaned up.",
            )?,
            PerformanceRule::all_of(
                &[r"spawn|add", r"for\s*\(.*\)"],
                "⚠️ Detected object spawning inside a loop — may lead to memory spikes.",
            )?,
            PerformanceRule::matches(
                r"Math\.random",
                "⚠️ Math.random detected — randomness inside hot loops can slow down simulations.",
            )?,
        ]))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// One warning per firing rule, empty when the snippet looks clean.
    pub fn scan(&self, code: &str) -> Vec<String> {
        let issues: Vec<String> = self.rules.iter().filter_map(|rule| rule.check(code)).collect();
        debug!(issue_count = issues.len(), "Scanned snippet for performance issues");
        issues
    }

    pub fn predict(&self, code: &str) -> String {
        let issues = self.scan(code);
        if issues.is_empty() {
            NO_ISSUES.to_string()
        } else {
            issues.join("\n")
        }
    }
}

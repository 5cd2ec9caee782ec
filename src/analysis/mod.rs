// Lexical heuristics over free text
//
// Rule tables are built once and shared; scanning never mutates them.

pub use behavior::{BehaviorRule, BehaviorRules};
pub use performance::{Detector, PerformanceRule, PerformanceRules};

mod behavior;
mod performance;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

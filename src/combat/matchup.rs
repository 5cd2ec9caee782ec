use std::fmt;

use super::format::fixed;
use super::models::{time_to_kill, NamedCombatant};

/// A side wins clearly when it kills at least 20% faster than the other.
const ADVANTAGE_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    First,
    Second,
    Balanced,
}

impl Advantage {
    /// `first_ttk` is how long the first entity needs to kill the second.
    pub fn classify(first_ttk: f64, second_ttk: f64) -> Self {
        if first_ttk < second_ttk * ADVANTAGE_FACTOR {
            Advantage::First
        } else if second_ttk < first_ttk * ADVANTAGE_FACTOR {
            Advantage::Second
        } else {
            Advantage::Balanced
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    pub first: String,
    pub second: String,
    /// Seconds for `first` to kill `second`
    pub first_ttk: f64,
    /// Seconds for `second` to kill `first`
    pub second_ttk: f64,
    pub advantage: Advantage,
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "⚔️ Simulating combat: {} vs {}", self.first, self.second)?;
        writeln!(
            f,
            "- {} kills {} in ~{} seconds",
            self.first,
            self.second,
            fixed(self.first_ttk, 2)
        )?;
        writeln!(
            f,
            "- {} kills {} in ~{} seconds",
            self.second,
            self.first,
            fixed(self.second_ttk, 2)
        )?;
        match self.advantage {
            Advantage::First => writeln!(f, "🟢 {} has a clear advantage.", self.first),
            Advantage::Second => writeln!(f, "🔴 {} has a clear advantage.", self.second),
            Advantage::Balanced => writeln!(f, "⚖️ Fairly balanced fight."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchupOutcome {
    NotEnoughEntities,
    Pairs(Vec<PairReport>),
}

impl fmt::Display for MatchupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchupOutcome::NotEnoughEntities => {
                write!(f, "⚠️ Provide at least two entities to simulate combat.")
            }
            MatchupOutcome::Pairs(pairs) => {
                let blocks: Vec<String> = pairs.iter().map(|pair| pair.to_string()).collect();
                write!(f, "{}", blocks.join("\n"))
            }
        }
    }
}

/// Evaluates every unordered pair in declaration order.
pub fn evaluate_matchups(entities: &[NamedCombatant]) -> MatchupOutcome {
    if entities.len() < 2 {
        return MatchupOutcome::NotEnoughEntities;
    }

    let mut pairs = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            let first_ttk = time_to_kill(a.stats.dps(), b.stats.hp);
            let second_ttk = time_to_kill(b.stats.dps(), a.stats.hp);
            pairs.push(PairReport {
                first: a.label.clone(),
                second: b.label.clone(),
                first_ttk,
                second_ttk,
                advantage: Advantage::classify(first_ttk, second_ttk),
            });
        }
    }

    MatchupOutcome::Pairs(pairs)
}

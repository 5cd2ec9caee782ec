use std::fmt;

use super::format::fixed;
use super::models::{BruteStats, Named};

/// Damage-to-HP ratio one side needs over the other to count as favoured.
const FAVOUR_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Favoured {
    First,
    Second,
    Neither,
}

/// Hit-count comparison between two entities that strike at the same rate.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceVerdict {
    pub first: String,
    pub second: String,
    /// Fraction of `second`'s HP removed by one hit from `first`
    pub first_ratio: f64,
    /// Fraction of `first`'s HP removed by one hit from `second`
    pub second_ratio: f64,
    pub favoured: Favoured,
}

impl BalanceVerdict {
    pub fn first_ttk(&self) -> f64 {
        1.0 / self.first_ratio
    }

    pub fn second_ttk(&self) -> f64 {
        1.0 / self.second_ratio
    }
}

impl fmt::Display for BalanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {}:", self.first, self.second)?;
        writeln!(
            f,
            "- {} TTK on {}: {}s",
            self.first,
            self.second,
            fixed(self.first_ttk(), 2)
        )?;
        writeln!(
            f,
            "- {} TTK on {}: {}s",
            self.second,
            self.first,
            fixed(self.second_ttk(), 2)
        )?;
        match self.favoured {
            Favoured::First => writeln!(
                f,
                "🟢 {} has an advantage. Consider nerfing damage or increasing {}'s HP.",
                self.first, self.second
            ),
            Favoured::Second => writeln!(
                f,
                "🔴 {} has an advantage. Consider adjusting stats for balance.",
                self.second
            ),
            Favoured::Neither => writeln!(f, "⚖️ This matchup seems balanced."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceOutcome {
    NotEnoughEntities,
    Verdicts(Vec<BalanceVerdict>),
}

impl fmt::Display for BalanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceOutcome::NotEnoughEntities => {
                write!(f, "Please provide at least two entities to compare.")
            }
            BalanceOutcome::Verdicts(verdicts) => {
                let blocks: Vec<String> = verdicts.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", blocks.join("\n"))
            }
        }
    }
}

pub fn suggest_balancing(entities: &[Named<BruteStats>]) -> BalanceOutcome {
    if entities.len() < 2 {
        return BalanceOutcome::NotEnoughEntities;
    }

    let mut verdicts = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            let first_ratio = a.stats.damage / b.stats.hp;
            let second_ratio = b.stats.damage / a.stats.hp;

            let favoured = if first_ratio > second_ratio * FAVOUR_FACTOR {
                Favoured::First
            } else if second_ratio > first_ratio * FAVOUR_FACTOR {
                Favoured::Second
            } else {
                Favoured::Neither
            };

            verdicts.push(BalanceVerdict {
                first: a.label.clone(),
                second: b.label.clone(),
                first_ratio,
                second_ratio,
                favoured,
            });
        }
    }

    BalanceOutcome::Verdicts(verdicts)
}

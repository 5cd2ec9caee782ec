use std::fmt;

use super::format::{fixed, plain};
use super::models::{EnemyHp, SkillDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillEfficiency {
    /// Every target in range dies
    High,
    Partial,
    NoKills,
}

impl fmt::Display for SkillEfficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkillEfficiency::High => "✅ High efficiency skill — wipes all targets in range.",
            SkillEfficiency::Partial => "🟡 Partial efficiency — good but situational.",
            SkillEfficiency::NoKills => "⚠️ No kills — might need a buff.",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillReport {
    pub skill: SkillDescriptor,
    /// Targets picked by the skill, weakest first
    pub targets: Vec<EnemyHp>,
    pub killed: usize,
    pub effective_dps: f64,
    pub efficiency: SkillEfficiency,
}

impl fmt::Display for SkillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🧠 Skill Impact Simulation:")?;
        writeln!(f)?;
        writeln!(f, "- Skill Damage: {}", plain(self.skill.damage))?;
        writeln!(f, "- Cooldown: {}s", plain(self.skill.cooldown))?;
        writeln!(f, "- Affects up to {} enemies", self.skill.area)?;
        writeln!(f, "- Enemies hit: {}", self.targets.len())?;
        writeln!(f, "- Enemies killed: {}", self.killed)?;
        writeln!(
            f,
            "- Estimated Effective DPS: {}",
            fixed(self.effective_dps, 2)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.efficiency)
    }
}

/// Casts `skill` at the weakest enemies it can reach.
///
/// Effective DPS always assumes the configured area is fully used, even
/// when fewer enemies are present.
pub fn simulate_skill(skill: &SkillDescriptor, enemies: &[EnemyHp]) -> SkillReport {
    let mut sorted = enemies.to_vec();
    // stable: equal HP keeps input order
    sorted.sort_by(|a, b| a.hp.total_cmp(&b.hp));
    sorted.truncate(skill.area as usize);
    let targets = sorted;

    let killed = targets
        .iter()
        .filter(|enemy| skill.damage >= enemy.hp)
        .count();

    let effective_dps = skill.damage * f64::from(skill.area) / skill.cooldown;

    let efficiency = if killed == targets.len() {
        SkillEfficiency::High
    } else if killed == 0 {
        SkillEfficiency::NoKills
    } else {
        SkillEfficiency::Partial
    };

    SkillReport {
        skill: *skill,
        targets,
        killed,
        effective_dps,
        efficiency,
    }
}

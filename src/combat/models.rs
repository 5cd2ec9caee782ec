use serde::{Deserialize, Serialize};

/// Full combat profile of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantStats {
    pub hp: f64,
    /// Damage dealt per hit
    pub damage: f64,
    /// Attacks per second
    pub attack_speed: f64,
}

impl CombatantStats {
    pub fn new(hp: f64, damage: f64, attack_speed: f64) -> Self {
        Self {
            hp,
            damage,
            attack_speed,
        }
    }

    pub fn dps(&self) -> f64 {
        self.striker().dps()
    }

    pub fn striker(&self) -> Striker {
        Striker {
            damage: self.damage,
            attack_speed: self.attack_speed,
        }
    }
}

/// Offensive half of a combatant, used where hit points don't matter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Striker {
    pub damage: f64,
    pub attack_speed: f64,
}

impl Striker {
    pub fn new(damage: f64, attack_speed: f64) -> Self {
        Self {
            damage,
            attack_speed,
        }
    }

    pub fn dps(&self) -> f64 {
        self.damage * self.attack_speed
    }
}

/// Hit points and per-hit damage, without attack speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BruteStats {
    pub hp: f64,
    pub damage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyHp {
    pub hp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    pub damage: f64,
    /// Seconds between casts
    pub cooldown: f64,
    /// Maximum number of enemies hit per cast
    pub area: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescriptor {
    pub name: String,
    /// Average enemy HP in the level
    pub enemy_hp: f64,
}

/// A caller-labelled entity. Slices of these keep declaration order,
/// which drives pair enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Named<T> {
    pub label: String,
    pub stats: T,
}

impl<T> Named<T> {
    pub fn new(label: impl Into<String>, stats: T) -> Self {
        Self {
            label: label.into(),
            stats,
        }
    }
}

pub type NamedCombatant = Named<CombatantStats>;

/// Seconds for `attacker_dps` to burn through `target_hp`.
///
/// Zero DPS yields an infinite (or NaN for zero HP) result.
pub fn time_to_kill(attacker_dps: f64, target_hp: f64) -> f64 {
    target_hp / attacker_dps
}

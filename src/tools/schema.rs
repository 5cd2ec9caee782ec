//! JSON Schemas advertised in tool listings.

use serde_json::{json, Map, Value};

use super::types::ToolName;

fn number(description: &str) -> Value {
    json!({ "type": "number", "description": description })
}

fn object(properties: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

fn array_of(items: Value, min_items: usize) -> Value {
    json!({ "type": "array", "items": items, "minItems": min_items })
}

fn combatant() -> Value {
    object(&[
        ("hp", number("Hit points")),
        ("damage", number("Damage dealt per hit")),
        ("attackSpeed", number("Attacks per second")),
    ])
}

fn striker() -> Value {
    object(&[
        ("damage", number("Player damage per hit")),
        ("attackSpeed", number("Attacks per second")),
    ])
}

fn brute(who: &str) -> Value {
    object(&[
        (
            "hp",
            number(&format!("{} hit points / life of the character", who)),
        ),
        ("damage", number(&format!("{} damage dealt per hit", who))),
    ])
}

pub fn input_schema(tool: ToolName) -> Value {
    match tool {
        ToolName::SuggestBalancing => object(&[
            ("player", brute("Player")),
            ("enemy", brute("Enemy")),
        ]),
        ToolName::PredictPerformanceImpact => object(&[(
            "code",
            json!({
                "type": "string",
                "description": "A code snippet to analyze for performance issues"
            }),
        )]),
        ToolName::SuggestAiStateMachine => object(&[(
            "description",
            json!({
                "type": "string",
                "description": "Natural language description of the character's behavior"
            }),
        )]),
        ToolName::SimulateCombat => object(&[("player", combatant()), ("enemy", combatant())]),
        ToolName::SimulateRoomSurvivalTime => object(&[
            ("player", combatant()),
            ("enemies", array_of(combatant(), 1)),
        ]),
        ToolName::SuggestWaveTiming => object(&[
            ("player", striker()),
            ("enemyHp", number("Average HP per enemy")),
            ("enemiesPerWave", number("Number of enemies per wave")),
        ]),
        ToolName::SimulateSkillImpact => object(&[
            (
                "skill",
                object(&[
                    ("damage", number("Damage the skill deals")),
                    ("cooldown", number("Cooldown time in seconds")),
                    (
                        "area",
                        json!({
                            "type": "integer",
                            "minimum": 1,
                            "description": "Number of enemies affected per use"
                        }),
                    ),
                ]),
            ),
            ("enemies", array_of(object(&[("hp", number("Enemy HP"))]), 1)),
        ]),
        ToolName::SuggestDifficultyRamp => object(&[
            (
                "levels",
                array_of(
                    object(&[
                        (
                            "name",
                            json!({ "type": "string", "description": "Name of the level" }),
                        ),
                        ("enemyHp", number("Average enemy HP in the level")),
                    ]),
                    2,
                ),
            ),
            ("player", striker()),
        ]),
    }
}

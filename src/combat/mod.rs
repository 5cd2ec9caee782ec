// Closed-form combat and balance estimators
//
// Every evaluator is a pure function from input records to a report whose
// Display impl produces the text sent back to the caller.

pub use balance::{suggest_balancing, BalanceOutcome, BalanceVerdict, Favoured};
pub use matchup::{evaluate_matchups, Advantage, MatchupOutcome, PairReport};
pub use models::*;
pub use ramp::{analyze_ramp, RampReport, RampStep, RampTransition};
pub use room::{simulate_room, RiskLevel, RoomReport};
pub use skill::{simulate_skill, SkillEfficiency, SkillReport};
pub use wave::{suggest_wave_timing, Pacing, WaveReport};

mod balance;
pub mod format;
mod matchup;
pub mod models;
mod ramp;
mod room;
mod skill;
mod wave;

//! Battle session state and attack resolution

mod attack;
mod session;

pub use attack::{AttackOutcome, PendingAttack};
pub use session::{BattlePhase, BattleSession};

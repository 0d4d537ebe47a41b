//! Domain types for battle resolution

mod config;
mod health;
mod matchup;

pub use config::{BattleConfig, Rules};
pub use health::Health;
pub use matchup::{WEAKNESS_CHART, is_effective, weakness_of};

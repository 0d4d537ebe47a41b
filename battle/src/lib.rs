//! Prompt classification and battle state for promptcast.
//!
//! The player types a free-text "attack"; this crate decides which element the
//! prompt belongs to, whether it is blocked by a banned word, and what the hit
//! does to the enemy and player health pools.
//!
//! # Overview
//!
//! `promptcast-battle` sits between `promptcast-protocol` (event vocabulary) and
//! whatever front end drives the game:
//!
//! ```text
//! promptcast-protocol (events + commands)
//!        │
//!        ▼
//! promptcast-battle (classifier + filter + session) ← THIS CRATE
//!        │
//!        └─> promptcast-client (timers, handlers, terminal game)
//! ```
//!
//! # Main Types
//!
//! - [`Lexicon`] / [`Classify`] - keyword-vote classifier
//! - [`BannedWords`] - per-session banned substrings
//! - [`BattleSession`] - the state machine, with a two-phase
//!   [`accept_attack`](BattleSession::accept_attack) /
//!   [`resolve_attack`](BattleSession::resolve_attack) protocol
//! - [`BattleConfig`] - rules and word lists injected at construction
//!
//! # Example Usage
//!
//! ```
//! use promptcast_battle::{AttackOutcome, BannedWords, BattleConfig, BattleSession, Element};
//!
//! let mut session = BattleSession::new(BattleConfig::default());
//! session.reset_with(Element::Fire, BannedWords::new(["dragon"])).unwrap();
//!
//! match session.submit_attack("a rolling wave") {
//!     AttackOutcome::Resolved(hit) => assert!(hit.is_effective),
//!     AttackOutcome::Rejected(reason) => panic!("rejected: {}", reason),
//! }
//! assert_eq!(session.enemy_hp(), 95);
//! ```

use thiserror::Error;

pub mod query;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use query::{BANNED_POOL, BannedWords, Classify, Lexicon, classify, draw_banned_words, find_banned};
pub use tracking::{AttackOutcome, BattlePhase, BattleSession, PendingAttack};
pub use types::{BattleConfig, Health, Rules, WEAKNESS_CHART, is_effective, weakness_of};

// Re-export commonly used protocol types
pub use promptcast_protocol::{AttackResolution, Element, Outcome, RejectReason, SessionSnapshot};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Enemy type must be fire, water or grass, got {0}")]
    NonCombatEnemy(Element),
}

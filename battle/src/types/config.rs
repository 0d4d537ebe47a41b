//! Immutable battle configuration

use crate::query::{BANNED_POOL, Lexicon};

/// Numeric rules for a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    pub enemy_max_hp: u32,
    pub player_max_hp: u32,
    /// Flat damage per resolved attack, regardless of element
    pub damage_per_hit: u32,
    /// How many banned words to draw per session
    pub banned_word_count: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            enemy_max_hp: 100,
            player_max_hp: 100,
            damage_per_hit: 5,
            banned_word_count: 10,
        }
    }
}

/// Everything a session needs that stays fixed for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub rules: Rules,
    pub lexicon: Lexicon,
    /// Candidates for the per-session banned words
    pub banned_pool: Vec<String>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            lexicon: Lexicon::default(),
            banned_pool: BANNED_POOL.iter().map(|w| w.to_string()).collect(),
        }
    }
}

//! Events emitted by the battle core for presentation layers

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::Element;

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "word", rename_all = "lowercase")]
pub enum RejectReason {
    /// Input contains a banned word (carries the word that matched)
    Banned(String),
    /// Input is empty or whitespace-only
    Empty,
    /// Another attack is still in flight
    Busy,
    /// No battle running: not started yet, or already over
    Inactive,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banned(_) => "banned",
            Self::Empty => "empty",
            Self::Busy => "busy",
            Self::Inactive => "inactive",
        }
    }

    /// Silent rejections are dropped without user-facing feedback
    pub fn is_silent(&self) -> bool {
        !matches!(self, Self::Banned(_))
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Banned(word) => write!(f, "banned word \"{}\"", word),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Terminal result of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Victory)
    }
}

/// Result of one resolved attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResolution {
    pub attack_element: Element,
    pub is_effective: bool,
    pub enemy_hp: u32,
    pub player_hp: u32,
    /// Set when this attack ended the battle
    pub outcome: Option<Outcome>,
}

/// Full session state for an initial render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub enemy_type: Element,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    /// Banned words in draw order
    pub banned_words: Vec<String>,
    pub attack_in_flight: bool,
}

impl SessionSnapshot {
    /// Enemy health bar fill, 0-100
    pub fn enemy_hp_percent(&self) -> u32 {
        hp_percent(self.enemy_hp, self.enemy_max_hp)
    }

    /// Player health bar fill, 0-100
    pub fn player_hp_percent(&self) -> u32 {
        hp_percent(self.player_hp, self.player_max_hp)
    }
}

/// Rounded percentage of `max`, 0-100. A zero max reads as empty.
pub fn hp_percent(current: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (current as f64 / max as f64 * 100.0).round() as u32
}

/// Everything the core reports to a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameEvent {
    /// Session created or restarted
    StateReset(SessionSnapshot),

    /// Input changed; `banned` is the first banned word found, if any
    BannedStatusChanged { banned: Option<String> },

    /// Attack accepted and now in flight
    AttackLaunched { text: String, attack_element: Element },

    AttackRejected { reason: RejectReason },

    AttackResolved(AttackResolution),

    /// Fired once per session
    GameOver { victory: bool },
}

impl GameEvent {
    /// Serialize as a single JSON line
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

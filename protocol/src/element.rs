//! Elemental tags carried by attacks and enemies

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Elemental tag inferred from a prompt or assigned to an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Grass,
    /// No keyword matched; never effective against anything
    Neutral,
}

impl Element {
    /// The three combat types, in enemy draw order
    pub const COMBAT: [Element; 3] = [Element::Fire, Element::Water, Element::Grass];

    /// Whether this is one of the three combat types
    pub fn is_combat(&self) -> bool {
        !matches!(self, Element::Neutral)
    }

    /// Parse from wire string (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "grass" => Some(Element::Grass),
            "neutral" => Some(Element::Neutral),
            _ => None,
        }
    }

    /// Lower-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Grass => "grass",
            Element::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Element {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_protocol(s).ok_or_else(|| ParseError::UnknownElement(s.to_string()))
    }
}

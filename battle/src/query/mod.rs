//! Prompt queries: elemental classification and banned-word filtering
//!
//! Both are pure functions of the input text and the static word lists
//! configured for the session.

mod banned;
mod classify;

pub use banned::{BANNED_POOL, BannedWords, draw_banned_words, find_banned};
pub use classify::{
    CLASSIFY_ORDER, Classify, FIRE_KEYWORDS, GRASS_KEYWORDS, Lexicon, WATER_KEYWORDS, classify,
};

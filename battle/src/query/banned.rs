//! Per-session banned words

use rand::Rng;
use rand::seq::SliceRandom;

/// Default candidates for banned words
pub static BANNED_POOL: &[&str] = &[
    "dark", "light", "giant", "small", "cute", "evil", "dragon", "sword", "shield", "magic",
    "spell", "shadow", "storm", "calm", "forest", "flame", "river", "ocean", "leaf", "ember",
    "smoke", "ash", "snow", "cloud", "rock", "earth", "metal", "sand", "ghost", "skull", "blood",
    "toxic", "poison", "laser", "robot", "pixel", "future", "ancient", "ruin", "castle", "king",
    "queen", "knight", "portal", "neon", "glitch",
];

/// Insertion-ordered set of banned substrings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedWords {
    words: Vec<String>,
}

impl BannedWords {
    /// Build from words in order, dropping empties and repeats
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut banned = Self::default();
        for word in words {
            banned.insert(word.into());
        }
        banned
    }

    /// Shuffle a copy of `pool` and keep the first `min(n, pool.len())` entries
    pub fn draw<S, R>(pool: &[S], n: usize, rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut copy: Vec<&str> = pool.iter().map(|w| w.as_ref()).collect();
        copy.shuffle(rng);
        copy.truncate(n);
        Self::new(copy)
    }

    fn insert(&mut self, word: String) {
        if !word.is_empty() && !self.contains(&word) {
            self.words.push(word);
        }
    }

    /// First banned word (in set order) occurring in `text`, case-insensitive
    pub fn find(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.words
            .iter()
            .find(|w| lowered.contains(w.to_lowercase().as_str()))
            .map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.clone()
    }
}

/// Draw a fresh banned set from a pool
pub fn draw_banned_words<S, R>(pool: &[S], n: usize, rng: &mut R) -> BannedWords
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    BannedWords::draw(pool, n, rng)
}

/// Find the first banned word present in `text`
pub fn find_banned<'a>(text: &str, banned: &'a BannedWords) -> Option<&'a str> {
    banned.find(text)
}

//! Keyword-vote classifier

use promptcast_protocol::Element;

pub const WATER_KEYWORDS: &[&str] = &[
    "water", "wave", "ocean", "sea", "rain", "splash", "bubble", "ice", "river", "flood",
    "tsunami", "droplet", "drip", "aqua", "hydro",
];

pub const FIRE_KEYWORDS: &[&str] = &[
    "fire", "flame", "lava", "ember", "heat", "burn", "inferno", "blaze", "pyro", "ignite",
    "torch", "smoke", "ash",
];

pub const GRASS_KEYWORDS: &[&str] = &[
    "grass", "plant", "leaf", "tree", "vine", "forest", "nature", "flower", "root", "seed",
    "moss", "herb", "green", "bloom", "wood",
];

/// Order in which types are scored. On a tie the earlier type wins.
pub const CLASSIFY_ORDER: [Element; 3] = [Element::Water, Element::Fire, Element::Grass];

/// Anything that can map prompt text to an element
pub trait Classify {
    fn classify(&self, text: &str) -> Element;
}

/// Ordered keyword lists, one per combat type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Lexicon {
    pub water: Vec<String>,
    pub fire: Vec<String>,
    pub grass: Vec<String>,
}

impl Lexicon {
    pub fn new<S: Into<String>>(
        water: impl IntoIterator<Item = S>,
        fire: impl IntoIterator<Item = S>,
        grass: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            water: water.into_iter().map(Into::into).collect(),
            fire: fire.into_iter().map(Into::into).collect(),
            grass: grass.into_iter().map(Into::into).collect(),
        }
    }

    /// Keyword list for a type (empty for Neutral)
    pub fn keywords(&self, element: Element) -> &[String] {
        match element {
            Element::Water => &self.water,
            Element::Fire => &self.fire,
            Element::Grass => &self.grass,
            Element::Neutral => &[],
        }
    }

    /// Per-type keyword hits, in [`CLASSIFY_ORDER`]
    ///
    /// A keyword counts once no matter how often it appears.
    pub fn scores(&self, text: &str) -> [(Element, usize); 3] {
        let lowered = text.to_lowercase();
        CLASSIFY_ORDER.map(|element| (element, count_matches(&lowered, self.keywords(element))))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            WATER_KEYWORDS.iter().copied(),
            FIRE_KEYWORDS.iter().copied(),
            GRASS_KEYWORDS.iter().copied(),
        )
    }
}

impl Classify for Lexicon {
    fn classify(&self, text: &str) -> Element {
        let mut best = Element::Neutral;
        let mut best_score = 0;

        // Later types only take over on a strict improvement
        for (element, score) in self.scores(text) {
            if score > best_score {
                best = element;
                best_score = score;
            }
        }

        best
    }
}

/// Classify text against a lexicon
pub fn classify(text: &str, lexicon: &Lexicon) -> Element {
    lexicon.classify(text)
}

fn count_matches(lowered: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|k| !k.is_empty() && lowered.contains(k.to_lowercase().as_str()))
        .count()
}

//! Elemental weakness chart

use promptcast_protocol::Element;

/// Defender -> the type that defeats it
///
/// Each combat type is beaten by exactly one other; Neutral has no entry.
pub static WEAKNESS_CHART: [(Element, Element); 3] = [
    (Element::Fire, Element::Water),
    (Element::Water, Element::Grass),
    (Element::Grass, Element::Fire),
];

/// Get the type that deals effective damage against `defender`
pub fn weakness_of(defender: Element) -> Option<Element> {
    WEAKNESS_CHART
        .iter()
        .find(|(d, _)| *d == defender)
        .map(|(_, attacker)| *attacker)
}

/// Check if an attack of type `attack` is effective against `defender`
pub fn is_effective(attack: Element, defender: Element) -> bool {
    weakness_of(defender) == Some(attack)
}

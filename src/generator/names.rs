//! Deterministic corporate-flavored campaign names.

use rand::Rng;

const QUALIFIERS: &[&str] = &[
    "Adaptive",
    "Quantified",
    "Streamlined",
    "Localized",
    "Evergreen",
    "Frictionless",
    "Compounding",
    "Segmented",
    "Always-on",
    "Full-funnel",
    "Incremental",
    "Omnichannel",
];

const THEMES: &[&str] = &[
    "brand moment",
    "retention loop",
    "upsell motion",
    "demand sprint",
    "awareness push",
    "reactivation wave",
    "lookalike expansion",
    "holiday burst",
    "prospecting lane",
    "loyalty ladder",
    "conversion corridor",
    "launch flight",
];

/// Sample a two-part campaign name. Collisions across campaigns are fine;
/// real accounts are full of near-duplicate names.
pub fn sample_name<R: Rng>(rng: &mut R) -> String {
    let qualifier = QUALIFIERS[rng.gen_range(0..QUALIFIERS.len())];
    let theme = THEMES[rng.gen_range(0..THEMES.len())];
    format!("{qualifier} {theme}")
}

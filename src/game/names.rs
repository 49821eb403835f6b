//! Display names for teams and their home cities.
//!
//! The feed squashes two-word team names ("mapleleafs") and abbreviates
//! some locales ("NY Islanders"), so both are cleaned up before display.

/// Canonical display name for a feed locale
pub fn fix_locale(locale: &str) -> String {
    // Both New York teams carry the team name in the locale ("NY Rangers")
    if locale == "NY" || locale.contains("NY ") {
        return "New York".to_string();
    }
    if locale.contains("Montr") {
        return "Montréal".to_string();
    }
    locale.to_string()
}

const TWO_WORD_NAMES: [(&str, &str); 4] = [
    ("wings", "Red Wings"),
    ("jackets", "Blue Jackets"),
    ("leafs", "Maple Leafs"),
    ("knights", "Golden Knights"),
];

/// Canonical, title-cased display name for a feed team name
pub fn fix_name(name: &str) -> String {
    let lower = name.to_lowercase();
    TWO_WORD_NAMES
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| title_case(name))
}

/// Upper-case the first letter of every word and lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

//! Characteristic names and the `Power Roll + …` phrase parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref POWER_ROLL_PHRASE: Regex = Regex::new(r"(?i)power roll \+(.+)").unwrap();
    static ref OR_WORD: Regex = Regex::new(r"(?i)\bor\b").unwrap();
    static ref FULL_NAME: Regex =
        Regex::new(r"(?i)\b(might|agility|reason|intuition|presence)\b").unwrap();
}

/// The five core characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    Might,
    Agility,
    Reason,
    Intuition,
    Presence,
}

impl Characteristic {
    pub const ALL: [Characteristic; 5] = [
        Characteristic::Might,
        Characteristic::Agility,
        Characteristic::Reason,
        Characteristic::Intuition,
        Characteristic::Presence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Characteristic::Might => "Might",
            Characteristic::Agility => "Agility",
            Characteristic::Reason => "Reason",
            Characteristic::Intuition => "Intuition",
            Characteristic::Presence => "Presence",
        }
    }

    pub fn abbreviation(&self) -> char {
        match self {
            Characteristic::Might => 'M',
            Characteristic::Agility => 'A',
            Characteristic::Reason => 'R',
            Characteristic::Intuition => 'I',
            Characteristic::Presence => 'P',
        }
    }

    /// Look up an upper-case single-letter abbreviation.
    pub fn from_abbreviation(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|ch| ch.abbreviation() == c)
    }
}

/// Map a token that is exactly one abbreviation letter to its full name,
/// passing anything else through as written.
pub fn expand_abbreviation(token: &str) -> String {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Characteristic::from_abbreviation(c)
            .map(|ch| ch.name().to_string())
            .unwrap_or_else(|| token.to_string()),
        _ => token.to_string(),
    }
}

/// Append `item` unless it is already present.
pub(crate) fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn characteristic_name(piece: &str) -> String {
    let single_letter = piece.chars().count() == 1;
    piece
        .chars()
        .next()
        .and_then(Characteristic::from_abbreviation)
        .filter(|_| single_letter || FULL_NAME.is_match(piece))
        .map(|ch| ch.name().to_string())
        .unwrap_or_else(|| title_case(piece))
}

/// Extract the characteristics offered by a `Power Roll + …` phrase.
///
/// Returns an empty list when the phrase is absent. Pieces that are neither
/// an abbreviation nor a full name are kept title-cased.
pub fn parse_characteristics(text: &str) -> Vec<String> {
    let Some(caps) = POWER_ROLL_PHRASE.captures(text) else {
        return Vec::new();
    };
    let segment = OR_WORD.replace_all(&caps[1], ",");

    let mut names = Vec::new();
    for piece in segment.split([',', '/']).map(str::trim).filter(|s| !s.is_empty()) {
        push_unique(&mut names, characteristic_name(piece));
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names_with_or() {
        assert_eq!(
            parse_characteristics("Power Roll + Might or Agility"),
            vec!["Might", "Agility"]
        );
    }

    #[test]
    fn test_parse_abbreviations_with_slash() {
        assert_eq!(parse_characteristics("Power Roll + M/A"), vec!["Might", "Agility"]);
    }

    #[test]
    fn test_parse_comma_list_with_trailing_or() {
        assert_eq!(
            parse_characteristics("Power Roll + Might, Reason, or Presence"),
            vec!["Might", "Reason", "Presence"]
        );
    }

    #[test]
    fn test_parse_deduplicates_in_order() {
        assert_eq!(
            parse_characteristics("power roll +Intuition or intuition or I"),
            vec!["Intuition"]
        );
    }

    #[test]
    fn test_unknown_piece_is_title_cased() {
        assert_eq!(parse_characteristics("Power Roll + mIND"), vec!["Mind"]);
        assert_eq!(parse_characteristics("Power Roll + Marksmanship"), vec!["Marksmanship"]);
    }

    #[test]
    fn test_missing_phrase_is_empty() {
        assert!(parse_characteristics("Might or Agility").is_empty());
        assert!(parse_characteristics("").is_empty());
    }

    #[test]
    fn test_expand_abbreviation() {
        assert_eq!(expand_abbreviation("P"), "Presence");
        assert_eq!(expand_abbreviation("p"), "p");
        assert_eq!(expand_abbreviation("Fire"), "Fire");
    }
}

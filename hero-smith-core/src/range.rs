//! Classification of legacy free-text ranges into distance/area pairs.
//!
//! Range text uses a small fixed vocabulary, so classification is an ordered
//! list of rules rather than a grammar. New shapes are appended before the
//! final catch-all.

use crate::models::{Distance, Range};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref AREA_WORD: Regex = Regex::new(r"(?i)\b(burst|cube)\b").unwrap();
    static ref LEADING_CUBE: Regex = Regex::new(r"(?i)^\d+\s+cube").unwrap();
    static ref MELEE_OR_RANGED: Regex = Regex::new(r"(?i)melee\s+\d+\s+or\s+ranged\s+\d+").unwrap();
    static ref OR_WORD: Regex = Regex::new(r"(?i)\bor\b").unwrap();
}

struct RangeRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    build: fn(&str) -> Range,
}

const RANGE_RULES: &[RangeRule] = &[
    RangeRule {
        name: "area",
        matches: is_area,
        build: area_range,
    },
    RangeRule {
        name: "melee_or_ranged",
        matches: is_melee_or_ranged,
        build: melee_or_ranged_range,
    },
    RangeRule {
        name: "distance",
        matches: any_text,
        build: plain_distance,
    },
];

fn is_area(text: &str) -> bool {
    AREA_WORD.is_match(text)
}

/// `3 cube within 1` keeps the cube size as the area and the rest as distance.
fn area_range(text: &str) -> Range {
    if let Some(m) = LEADING_CUBE.find(text) {
        let rest = text[m.end()..].trim();
        return Range {
            distance: (!rest.is_empty()).then(|| Distance::Single(rest.to_string())),
            area: Some(m.as_str().to_string()),
        };
    }
    Range {
        distance: None,
        area: Some(text.to_string()),
    }
}

fn is_melee_or_ranged(text: &str) -> bool {
    MELEE_OR_RANGED.is_match(text)
}

fn melee_or_ranged_range(text: &str) -> Range {
    let alternatives = OR_WORD
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    Range {
        distance: Some(Distance::Alternatives(alternatives)),
        area: None,
    }
}

fn any_text(_: &str) -> bool {
    true
}

fn plain_distance(text: &str) -> Range {
    Range {
        distance: Some(Distance::Single(text.to_string())),
        area: None,
    }
}

/// Classify a legacy range string. Empty or absent text yields null for both fields.
pub fn classify_range(raw: Option<&str>) -> Range {
    let Some(text) = raw.filter(|t| !t.is_empty()) else {
        return Range::default();
    };

    match RANGE_RULES.iter().find(|rule| (rule.matches)(text)) {
        Some(rule) => {
            tracing::trace!("range {:?} matched rule {}", text, rule.name);
            (rule.build)(text)
        }
        None => plain_distance(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(s: &str) -> Option<Distance> {
        Some(Distance::Single(s.to_string()))
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(classify_range(None), Range::default());
        assert_eq!(classify_range(Some("")), Range::default());
    }

    #[test]
    fn test_burst_is_area_only() {
        let range = classify_range(Some("2 burst"));
        assert_eq!(range.area.as_deref(), Some("2 burst"));
        assert_eq!(range.distance, None);
    }

    #[test]
    fn test_cube_with_trigger_range() {
        let range = classify_range(Some("3 cube within 1"));
        assert_eq!(range.area.as_deref(), Some("3 cube"));
        assert_eq!(range.distance, single("within 1"));
    }

    #[test]
    fn test_bare_cube_has_no_distance() {
        let range = classify_range(Some("4 Cube"));
        assert_eq!(range.area.as_deref(), Some("4 Cube"));
        assert_eq!(range.distance, None);
    }

    #[test]
    fn test_cube_not_leading_keeps_full_text() {
        let range = classify_range(Some("Ranged 10, 3 cube"));
        assert_eq!(range.area.as_deref(), Some("Ranged 10, 3 cube"));
        assert_eq!(range.distance, None);
    }

    #[test]
    fn test_area_word_must_be_whole_word() {
        let range = classify_range(Some("Cubed 5"));
        assert_eq!(range.distance, single("Cubed 5"));
        assert_eq!(range.area, None);
    }

    #[test]
    fn test_melee_or_ranged_alternatives() {
        let range = classify_range(Some("Melee 1 or Ranged 10"));
        assert_eq!(
            range.distance,
            Some(Distance::Alternatives(vec![
                "Melee 1".to_string(),
                "Ranged 10".to_string()
            ]))
        );
        assert_eq!(range.area, None);

        let range = classify_range(Some("melee 2 or ranged 5"));
        assert_eq!(
            range.distance,
            Some(Distance::Alternatives(vec![
                "melee 2".to_string(),
                "ranged 5".to_string()
            ]))
        );
    }

    #[test]
    fn test_plain_distance_unchanged() {
        let range = classify_range(Some("Self"));
        assert_eq!(range.distance, single("Self"));
        assert_eq!(range.area, None);
    }

    #[test]
    fn test_alternatives_serialize_as_array() {
        let json = serde_json::to_value(classify_range(Some("Melee 1 or Ranged 10"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"distance": ["Melee 1", "Ranged 10"], "area": null})
        );
    }
}

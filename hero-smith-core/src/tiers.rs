//! Decomposition of a single power-roll tier's effect text.
//!
//! Damage is only recognized at the very start of the text. Conditions and
//! potency tokens are searched across the whole text. Nothing here fails:
//! unrecognized text leaves the structured fields empty and is always kept
//! verbatim in `all_text`.

use crate::characteristics::{expand_abbreviation, push_unique};
use crate::models::{Condition, Potency, Tier};
use lazy_static::lazy_static;
use regex::Regex;

/// Damage types recognized when auditing damage expressions.
pub const DAMAGE_TYPES: [&str; 10] = [
    "untyped",
    "acid",
    "cold",
    "corruption",
    "fire",
    "holy",
    "lightning",
    "poison",
    "psychic",
    "sonic",
];

lazy_static! {
    static ref LEADING_DAMAGE: Regex =
        Regex::new(r"(?i)^\s*(\d+)\s*\+\s*([^;]+?)\s*damage\b").unwrap();
    static ref OR_WORD: Regex = Regex::new(r"(?i)\bor\b").unwrap();
    static ref POTENCY_TOKEN: Regex = Regex::new(r"[MARIP]<[WASwas]").unwrap();
    static ref CONDITION_WORDS: Vec<(Condition, Regex)> = Condition::ALL
        .iter()
        .map(|c| (*c, Regex::new(&format!(r"(?i)\b{}\b", c.as_str())).unwrap()))
        .collect();
    static ref DAMAGE_TYPE_WORDS: Regex =
        Regex::new(&format!(r"(?i)\b({})\b", DAMAGE_TYPES.join("|"))).unwrap();
}

/// Leading `<n> + <characteristics> damage` clause of a tier.
struct DamageClause {
    expression: String,
    base_value: Option<i64>,
    options: Vec<String>,
}

fn leading_damage(text: &str) -> Option<DamageClause> {
    let caps = LEADING_DAMAGE.captures(text)?;

    let mut options = Vec::new();
    for piece in OR_WORD.split(&caps[2]) {
        let cleaned = piece.replace([',', '+'], "");
        if let Some(token) = cleaned.split_whitespace().next() {
            push_unique(&mut options, expand_abbreviation(token));
        }
    }

    let expression = caps[0].trim().to_string();
    let base_value = match caps[1].parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("base damage in {:?} not stored: {}", expression, e);
            None
        }
    };

    Some(DamageClause {
        expression,
        base_value,
        options,
    })
}

/// Text left after removing the damage expression and a leading `;`.
fn remainder_after(text: &str, expression: &str) -> Option<String> {
    let rest = text.replacen(expression, "", 1);
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(';').unwrap_or(rest).trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

/// Conditions named anywhere in `text`, in recognition order.
pub fn find_conditions(text: &str) -> Vec<Condition> {
    CONDITION_WORDS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(condition, _)| *condition)
        .collect()
}

/// Decompose one tier's effect text.
///
/// Every potency token found is paired with the first recognized condition of
/// the tier, even when the text names several.
pub fn decompose_tier(text: &str) -> Tier {
    let damage = leading_damage(text);
    let conditions = find_conditions(text);
    let first_condition = conditions.first().copied();

    let potencies = POTENCY_TOKEN
        .find_iter(text)
        .map(|m| Potency {
            raw: m.as_str().to_string(),
            condition: first_condition,
        })
        .collect();

    let (damage_expression, base_damage_value, characteristic_damage_options, descriptive_text) =
        match damage {
            Some(clause) => {
                let descriptive = remainder_after(text, &clause.expression);
                (
                    Some(clause.expression),
                    clause.base_value,
                    clause.options,
                    descriptive,
                )
            }
            None => (None, None, Vec::new(), None),
        };

    Tier {
        damage_expression,
        base_damage_value,
        characteristic_damage_options,
        damage_types: None,
        secondary_damage_expression: None,
        descriptive_text,
        potencies,
        conditions,
        all_text: text.to_string(),
    }
}

/// Decompose a tier's text if there is one.
pub fn extract_tier(text: Option<&str>) -> Option<Tier> {
    text.map(decompose_tier)
}

/// Damage types named in a damage expression, lower-cased, for reporting.
pub fn detect_damage_types(expression: &str) -> Vec<String> {
    let mut found = Vec::new();
    for m in DAMAGE_TYPE_WORDS.find_iter(expression) {
        push_unique(&mut found, m.as_str().to_lowercase());
    }
    found
}

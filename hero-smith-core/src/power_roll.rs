//! Power roll construction from the two legacy record shapes.

use crate::characteristics::parse_characteristics;
use crate::legacy::{first_text, get_present};
use crate::models::{PowerRoll, TierKey, Tiers};
use crate::tiers::extract_tier;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

pub const POWER_ROLL_LABEL: &str = "Power roll";

lazy_static! {
    static ref SCORE_SEPARATOR: Regex = Regex::new(r"(?i)\s*,\s*|\s+or\s+").unwrap();
}

/// Legacy power roll shapes, resolved once per record.
#[derive(Debug, Clone, Copy)]
pub enum LegacyPowerRoll<'a> {
    /// `"power_roll": "Power Roll + Might or Agility"` with sibling
    /// `roll_result_low/mid/high` objects holding an `effect` string.
    Flat {
        phrase: &'a str,
        record: &'a Map<String, Value>,
    },
    /// `"power_roll": {"characteristics_score": …, "roll_results": {"low": {…}, …}}`
    Structured {
        characteristics_score: Option<&'a str>,
        roll_results: &'a Map<String, Value>,
    },
}

impl<'a> LegacyPowerRoll<'a> {
    /// Detect the shape of `record["power_roll"]`, or `None` when it has no usable power roll.
    pub fn detect(record: &'a Map<String, Value>) -> Option<Self> {
        match record.get("power_roll")? {
            Value::String(phrase) => Some(LegacyPowerRoll::Flat { phrase, record }),
            Value::Object(obj) => {
                let roll_results = get_present(obj, "roll_results")?.as_object()?;
                Some(LegacyPowerRoll::Structured {
                    characteristics_score: obj.get("characteristics_score").and_then(Value::as_str),
                    roll_results,
                })
            }
            _ => None,
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            LegacyPowerRoll::Flat { .. } => "flat",
            LegacyPowerRoll::Structured { .. } => "structured",
        }
    }

    fn characteristics(&self) -> Vec<String> {
        match *self {
            LegacyPowerRoll::Flat { phrase, .. } => parse_characteristics(phrase),
            LegacyPowerRoll::Structured {
                characteristics_score,
                ..
            } => characteristics_score
                .map(|score| {
                    SCORE_SEPARATOR
                        .split(score)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Effect text for one tier, `None` when the source has no such tier.
    fn tier_text(&self, key: TierKey) -> Option<&'a str> {
        match *self {
            LegacyPowerRoll::Flat { record, .. } => {
                let result = get_present(record, &format!("roll_result_{}", key))?;
                result.get("effect").and_then(Value::as_str)
            }
            LegacyPowerRoll::Structured { roll_results, .. } => {
                let result = get_present(roll_results, key.as_str())?.as_object()?;
                first_text(result, &["descriptive_text", "damage"])
            }
        }
    }
}

/// Build the canonical power roll for a legacy record.
///
/// Returns `None` when the record has no power roll or when no tier yields
/// any text; a power roll without tiers is treated as absent.
pub fn build_power_roll(record: &Map<String, Value>) -> Option<PowerRoll> {
    let legacy = LegacyPowerRoll::detect(record)?;

    let mut tiers = Tiers::default();
    for key in TierKey::ALL {
        if let Some(tier) = extract_tier(legacy.tier_text(key)) {
            tiers.set(key, tier);
        }
    }

    if tiers.is_empty() {
        tracing::debug!("{} power roll has no tiers, omitting", legacy.shape_name());
        return None;
    }

    tracing::trace!("{} power roll with {} tiers", legacy.shape_name(), tiers.len());
    Some(PowerRoll {
        label: POWER_ROLL_LABEL.to_string(),
        characteristics: legacy.characteristics(),
        tiers,
    })
}

//! Rewriting of legacy ability records into the canonical schema.

use crate::costs::normalize_cost;
use crate::legacy::{first_text, get_present, get_text, is_truthy};
use crate::models::{Ability, Costs, Range};
use crate::power_roll::build_power_roll;
use crate::range::classify_range;
use crate::tiers::detect_damage_types;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Keys that only appear in legacy records.
const LEGACY_KEYS: [&str; 7] = [
    "cost",
    "description",
    "action_type",
    "distance",
    "roll_result_low",
    "roll_result_mid",
    "roll_result_high",
];

/// How a record was turned into its canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    /// Rewritten from the legacy schema.
    Legacy,
    /// Already canonical; carried through unchanged.
    Canonical,
}

/// Whether a record already has the canonical shape.
fn looks_canonical(record: &Map<String, Value>) -> bool {
    if LEGACY_KEYS.iter().any(|key| record.contains_key(*key)) {
        return false;
    }
    let costs_ok = record
        .get("costs")
        .and_then(Value::as_object)
        .is_some_and(|costs| costs.contains_key("resource"));
    let range_ok = record.get("range").is_some_and(Value::is_object);
    let power_roll_ok = match record.get("power_roll") {
        None => true,
        Some(Value::Object(roll)) => roll.contains_key("tiers"),
        Some(_) => false,
    };
    costs_ok && range_ok && power_roll_ok
}

fn canonical_ability(record: &Map<String, Value>) -> Option<Ability> {
    if !looks_canonical(record) {
        return None;
    }
    match serde_json::from_value(Value::Object(record.clone())) {
        Ok(ability) => Some(ability),
        Err(e) => {
            tracing::debug!("canonical-looking record did not decode ({}), rewriting", e);
            None
        }
    }
}

/// Cost from whichever legacy representation the record carries.
fn legacy_costs(record: &Map<String, Value>) -> Costs {
    match get_present(record, "cost") {
        Some(Value::String(text)) => return normalize_cost(Some(text.as_str())),
        Some(Value::Number(n)) => return normalize_cost(Some(n.to_string().as_str())),
        _ => {}
    }

    match record.get("costs").and_then(Value::as_object) {
        Some(costs) if costs.contains_key("resource") => {
            serde_json::from_value(Value::Object(costs.clone())).unwrap_or_default()
        }
        Some(costs) => normalize_cost(get_text(costs, "amount")),
        None => normalize_cost(None),
    }
}

/// Range from a legacy text field, or an already-structured `range` object.
fn legacy_range(record: &Map<String, Value>) -> Range {
    if let Some(range @ Value::Object(_)) = record.get("range") {
        match serde_json::from_value(range.clone()) {
            Ok(range) => return range,
            Err(e) => tracing::debug!("structured range did not decode ({}), classifying text", e),
        }
    }
    classify_range(first_text(record, &["range", "distance"]))
}

/// Keyword strings in order. A comma-separated string is split; array
/// elements that are not strings are dropped with a warning.
fn keywords(record: &Map<String, Value>) -> Vec<String> {
    match record.get("keywords") {
        Some(Value::Array(items)) => {
            let (kept, dropped): (Vec<&Value>, Vec<&Value>) =
                items.iter().partition(|item| item.is_string());
            if !dropped.is_empty() {
                tracing::warn!(
                    "ability {}: dropping non-string keywords {:?}",
                    passthrough(record, "id"),
                    dropped
                );
            }
            kept.into_iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        }
        Some(Value::String(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(other) if is_truthy(other) => {
            tracing::warn!(
                "ability {}: dropping keywords value {}",
                passthrough(record, "id"),
                other
            );
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn passthrough(record: &Map<String, Value>, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

fn rewrite_legacy(record: &Map<String, Value>) -> Ability {
    Ability {
        id: passthrough(record, "id"),
        name: passthrough(record, "name"),
        costs: legacy_costs(record),
        story_text: first_text(record, &["story_text", "description"]).map(str::to_string),
        keywords: keywords(record),
        action_type: first_text(record, &["action_type", "type"]).map(str::to_string),
        range: legacy_range(record),
        targets: get_present(record, "targets").cloned().unwrap_or(Value::Null),
        power_roll: build_power_roll(record),
        effect: passthrough(record, "effect"),
        special_effect: passthrough(record, "special_effect"),
    }
}

/// Rewrite one record, reporting whether it was legacy or already canonical.
pub fn rewrite_ability_with_origin(record: &Value) -> (Ability, RecordOrigin) {
    let empty = Map::new();
    let fields = match record.as_object() {
        Some(fields) => fields,
        None => {
            tracing::warn!("ability record is not an object, emitting empty record: {}", record);
            &empty
        }
    };

    if let Some(ability) = canonical_ability(fields) {
        return (ability, RecordOrigin::Canonical);
    }

    let ability = rewrite_legacy(fields);
    tracing::debug!(
        "rewrote ability {} ({} power roll tiers)",
        ability.id,
        ability.power_roll.as_ref().map_or(0, |roll| roll.tiers.len())
    );
    (ability, RecordOrigin::Legacy)
}

/// Rewrite one legacy ability record into the canonical schema.
pub fn rewrite_ability(record: &Value) -> Ability {
    rewrite_ability_with_origin(record).0
}

/// Totals gathered while rewriting a batch of abilities.
#[derive(Debug, Default)]
pub struct RewriteSummary {
    pub total_records: usize,
    pub already_canonical: usize,
    pub with_power_roll: usize,
    pub tiers: usize,
    pub tiers_with_damage: usize,
    /// Tiers without a leading damage expression, left unstructured
    pub tiers_without_damage: usize,
    pub damage_types: BTreeMap<String, usize>,
}

impl RewriteSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ability(&mut self, ability: &Ability, origin: RecordOrigin) {
        self.total_records += 1;
        if origin == RecordOrigin::Canonical {
            self.already_canonical += 1;
        }

        let Some(roll) = &ability.power_roll else {
            return;
        };
        self.with_power_roll += 1;

        for (_, tier) in roll.tiers.iter() {
            self.tiers += 1;
            match &tier.damage_expression {
                Some(expression) => {
                    self.tiers_with_damage += 1;
                    for damage_type in detect_damage_types(expression) {
                        *self.damage_types.entry(damage_type).or_insert(0) += 1;
                    }
                }
                None => self.tiers_without_damage += 1,
            }
        }
    }
}

/// Rewrite a whole batch, keeping record count and order.
pub fn rewrite_abilities(records: &[Value]) -> (Vec<Ability>, RewriteSummary) {
    let mut summary = RewriteSummary::new();
    let abilities = records
        .iter()
        .map(|record| {
            let (ability, origin) = rewrite_ability_with_origin(record);
            summary.add_ability(&ability, origin);
            ability
        })
        .collect();
    (abilities, summary)
}

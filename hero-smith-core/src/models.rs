//! Data models for canonical Hero Smith records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Canonical ability record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    pub costs: Costs,
    #[serde(default)]
    pub story_text: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(rename = "type", default)]
    pub action_type: Option<String>,
    pub range: Range,
    #[serde(default)]
    pub targets: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_roll: Option<PowerRoll>,
    #[serde(default)]
    pub effect: Value,
    #[serde(default)]
    pub special_effect: Value,
}

/// Resource spent to use an ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Resource {
    HeroicResource,
    /// Cost text that no rule recognized, kept verbatim in the amount
    Raw,
    /// Any other named resource found in already-canonical data
    Named(String),
}

impl From<String> for Resource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "heroic_resource" => Resource::HeroicResource,
            "raw" => Resource::Raw,
            _ => Resource::Named(value),
        }
    }
}

impl From<Resource> for String {
    fn from(value: Resource) -> Self {
        match value {
            Resource::HeroicResource => "heroic_resource".to_string(),
            Resource::Raw => "raw".to_string(),
            Resource::Named(name) => name,
        }
    }
}

/// Cost amount: a count or a word such as "all"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostAmount {
    Count(i64),
    Text(String),
}

/// Structured cost; both fields are null together when the ability is free
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Costs {
    pub resource: Option<Resource>,
    pub amount: Option<CostAmount>,
}

/// Distance of a range: one phrase or melee/ranged alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Single(String),
    Alternatives(Vec<String>),
}

/// Structured range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub distance: Option<Distance>,
    pub area: Option<String>,
}

/// Power roll block; absent from the record when no tier could be built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRoll {
    pub label: String,
    pub characteristics: Vec<String>,
    pub tiers: Tiers,
}

/// Tier bands of a power roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKey {
    Low,
    Mid,
    High,
}

impl TierKey {
    pub const ALL: [TierKey; 3] = [TierKey::Low, TierKey::Mid, TierKey::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TierKey::Low => "low",
            TierKey::Mid => "mid",
            TierKey::High => "high",
        }
    }
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier mapping; a missing band is omitted rather than serialized as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Tier>,
}

impl Tiers {
    pub fn get(&self, key: TierKey) -> Option<&Tier> {
        match key {
            TierKey::Low => self.low.as_ref(),
            TierKey::Mid => self.mid.as_ref(),
            TierKey::High => self.high.as_ref(),
        }
    }

    pub fn set(&mut self, key: TierKey, tier: Tier) {
        let slot = match key {
            TierKey::Low => &mut self.low,
            TierKey::Mid => &mut self.mid,
            TierKey::High => &mut self.high,
        };
        *slot = Some(tier);
    }

    /// Present tiers in low, mid, high order.
    pub fn iter(&self) -> impl Iterator<Item = (TierKey, &Tier)> {
        TierKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|tier| (key, tier)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decomposed effect text of one tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tier {
    pub damage_expression: Option<String>,
    pub base_damage_value: Option<i64>,
    pub characteristic_damage_options: Vec<String>,
    /// Reserved; damage types stay inside `damage_expression`
    pub damage_types: Option<Vec<String>>,
    /// Reserved
    pub secondary_damage_expression: Option<String>,
    pub descriptive_text: Option<String>,
    pub potencies: Vec<Potency>,
    pub conditions: Vec<Condition>,
    pub all_text: String,
}

/// Potency token kept verbatim, e.g. `A<w`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potency {
    pub raw: String,
    pub condition: Option<Condition>,
}

/// Status conditions recognized in tier text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Bleeding,
    Dazed,
    Frightened,
    Grabbed,
    Prone,
    Restrained,
    Slowed,
    Taunted,
    Weakened,
}

impl Condition {
    /// Recognition order; also the order conditions are reported in.
    pub const ALL: [Condition; 9] = [
        Condition::Bleeding,
        Condition::Dazed,
        Condition::Frightened,
        Condition::Grabbed,
        Condition::Prone,
        Condition::Restrained,
        Condition::Slowed,
        Condition::Taunted,
        Condition::Weakened,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Bleeding => "bleeding",
            Condition::Dazed => "dazed",
            Condition::Frightened => "frightened",
            Condition::Grabbed => "grabbed",
            Condition::Prone => "prone",
            Condition::Restrained => "restrained",
            Condition::Slowed => "slowed",
            Condition::Taunted => "taunted",
            Condition::Weakened => "weakened",
        }
    }
}


/// Simplified complication record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complication {
    #[serde(default)]
    pub id: Value,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Value,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<ComplicationEffects>,
}

/// Benefit/drawback text split out of a complication description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplicationEffects {
    pub benefit: Option<String>,
    pub drawback: Option<String>,
    pub both: Option<String>,
}

//! Classification of legacy free-text ability costs.

use crate::models::{CostAmount, Costs, Resource};

const ALL_HEROIC_RESOURCE: &str = "all your heroic resource";

/// One cost pattern: the first rule whose predicate accepts the trimmed text wins.
struct CostRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    build: fn(&str) -> Costs,
}

const COST_RULES: &[CostRule] = &[
    CostRule {
        name: "all_heroic_resource",
        matches: is_all_heroic_resource,
        build: all_heroic_resource,
    },
    CostRule {
        name: "raw",
        matches: any_text,
        build: raw_cost,
    },
];

fn is_all_heroic_resource(text: &str) -> bool {
    text.eq_ignore_ascii_case(ALL_HEROIC_RESOURCE)
}

fn all_heroic_resource(_: &str) -> Costs {
    Costs {
        resource: Some(Resource::HeroicResource),
        amount: Some(CostAmount::Text("all".to_string())),
    }
}

fn any_text(_: &str) -> bool {
    true
}

fn raw_cost(text: &str) -> Costs {
    Costs {
        resource: Some(Resource::Raw),
        amount: Some(CostAmount::Text(text.to_string())),
    }
}

/// Normalize a legacy cost string into a `{resource, amount}` pair.
///
/// Absent or blank text means the ability is free and yields null for both
/// fields. Text no rule understands is preserved under the `raw` resource.
pub fn normalize_cost(raw: Option<&str>) -> Costs {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Costs::default();
    };

    COST_RULES
        .iter()
        .find(|rule| (rule.matches)(text))
        .map(|rule| {
            tracing::trace!("cost {:?} matched rule {}", text, rule.name);
            (rule.build)(text)
        })
        .unwrap_or_else(|| raw_cost(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cost_is_null_pair() {
        assert_eq!(normalize_cost(None), Costs { resource: None, amount: None });
        assert_eq!(normalize_cost(Some("")), Costs::default());
        assert_eq!(normalize_cost(Some("   ")), Costs::default());
    }

    #[test]
    fn test_all_heroic_resource_any_casing() {
        for text in [
            "All Your Heroic Resource",
            "all your heroic resource",
            "  ALL YOUR HEROIC RESOURCE ",
        ] {
            let costs = normalize_cost(Some(text));
            assert_eq!(costs.resource, Some(Resource::HeroicResource));
            assert_eq!(costs.amount, Some(CostAmount::Text("all".to_string())));
        }
    }

    #[test]
    fn test_unrecognized_cost_kept_raw() {
        let costs = normalize_cost(Some(" 3 Ferocity "));
        assert_eq!(costs.resource, Some(Resource::Raw));
        assert_eq!(costs.amount, Some(CostAmount::Text("3 Ferocity".to_string())));
    }

    #[test]
    fn test_phrase_must_match_exactly() {
        let costs = normalize_cost(Some("All your Heroic Resource (minimum 1)"));
        assert_eq!(costs.resource, Some(Resource::Raw));
    }

    #[test]
    fn test_cost_serializes_both_keys() {
        let json = serde_json::to_value(normalize_cost(None)).unwrap();
        assert_eq!(json, serde_json::json!({"resource": null, "amount": null}));

        let json = serde_json::to_value(normalize_cost(Some("All your heroic resource"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"resource": "heroic_resource", "amount": "all"})
        );
    }
}

//! Batch migrations over JSON data files.
//!
//! Each processor reads the whole file, transforms every record in memory
//! and writes the result back in one step. Nothing is written when a
//! precondition fails.

use crate::abilities::{rewrite_abilities, RewriteSummary};
use crate::complications::{simplify_complications, SimplifySummary};
use crate::error::Result;
use crate::file_utils::{read_json_array, write_json_pretty};
use std::path::Path;
use tracing::info;

/// Rewrite an abilities file into the canonical schema in place.
pub fn rewrite_abilities_file(path: &Path) -> Result<RewriteSummary> {
    info!("Rewriting abilities in {:?}", path);
    let records = read_json_array(path)?;
    info!("Read {} ability records", records.len());

    let (abilities, summary) = rewrite_abilities(&records);
    write_json_pretty(path, &abilities)?;

    info!(
        "Wrote {} abilities ({} already canonical, {} with power rolls)",
        abilities.len(),
        summary.already_canonical,
        summary.with_power_roll
    );
    Ok(summary)
}

/// Simplify a complications file in place.
pub fn simplify_complications_file(path: &Path) -> Result<SimplifySummary> {
    info!("Simplifying complications in {:?}", path);
    let records = read_json_array(path)?;

    let (complications, summary) = simplify_complications(&records);
    write_json_pretty(path, &complications)?;

    info!(
        "Wrote {} complications ({} with effects)",
        complications.len(),
        summary.with_effects
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeroSmithError;
    use serde_json::{json, Value};

    #[test]
    fn test_rewrite_abilities_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abilities.json");
        let input = json!([
            {"id": "z", "name": "Zeal", "cost": "3 Piety", "distance": "Self"},
            {
                "id": "a",
                "name": "Arc",
                "power_roll": "Power Roll + Reason",
                "roll_result_low": {"effect": "2 + R lightning damage"}
            }
        ]);
        std::fs::write(&path, input.to_string()).unwrap();

        let summary = rewrite_abilities_file(&path).unwrap();
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.damage_types.get("lightning"), Some(&1));

        let output: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let output = output.as_array().unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output[0]["id"], "z");
        assert_eq!(output[0]["costs"], json!({"resource": "raw", "amount": "3 Piety"}));
        assert!(output[0].get("power_roll").is_none());
        assert_eq!(output[1]["id"], "a");
        assert_eq!(output[1]["power_roll"]["characteristics"], json!(["Reason"]));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abilities.json");
        let input = json!([{
            "id": "a",
            "cost": "All your heroic resource",
            "distance": "2 burst",
            "power_roll": "Power Roll + Might",
            "roll_result_high": {"effect": "The target is Frightened (P<s)"}
        }]);
        std::fs::write(&path, input.to_string()).unwrap();

        rewrite_abilities_file(&path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let summary = rewrite_abilities_file(&path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(summary.already_canonical, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_root_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abilities.json");
        std::fs::write(&path, r#"{"abilities": []}"#).unwrap();

        let result = rewrite_abilities_file(&path);
        assert!(matches!(result, Err(HeroSmithError::InvalidRoot(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"abilities": []}"#);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = simplify_complications_file(&dir.path().join("complications.json"));
        let err = result.unwrap_err();
        assert!(matches!(err, HeroSmithError::NotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_simplify_complications_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complications.json");
        std::fs::write(
            &path,
            json!([{"id": "c", "name": "Cursed", "description": "Dark. Drawback: Bad luck."}]).to_string(),
        )
        .unwrap();

        let summary = simplify_complications_file(&path).unwrap();
        assert_eq!(summary.with_effects, 1);

        let output: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            output[0]["effects"],
            json!({"benefit": null, "drawback": "Bad luck.", "both": null})
        );
        assert_eq!(output[0]["type"], "complication");
    }
}

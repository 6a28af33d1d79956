//! Splitting of complication descriptions into story text and effects.

use crate::legacy::get_text;
use crate::models::{Complication, ComplicationEffects};
use serde_json::{Map, Value};

const BOTH_LABEL: &str = "Benefit and Drawback:";
const BENEFIT_LABEL: &str = "Benefit:";
const DRAWBACK_LABEL: &str = "Drawback:";

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Split a description at its first `Benefit and Drawback:`, `Benefit:` or
/// `Drawback:` label. Without any label the whole text is story.
pub fn split_description(description: &str) -> (Option<String>, Option<ComplicationEffects>) {
    if description.is_empty() {
        return (None, None);
    }

    if let Some(idx) = description.find(BOTH_LABEL) {
        let story = non_empty(&description[..idx]);
        let both = non_empty(&description[idx + BOTH_LABEL.len()..]);
        return (
            story,
            Some(ComplicationEffects {
                benefit: None,
                drawback: None,
                both,
            }),
        );
    }

    let benefit_idx = description.find(BENEFIT_LABEL);
    let drawback_idx = description.find(DRAWBACK_LABEL);
    let story_end = match (benefit_idx, drawback_idx) {
        (None, None) => return (non_empty(description), None),
        (Some(b), Some(d)) => b.min(d),
        (Some(i), None) | (None, Some(i)) => i,
    };
    let story = non_empty(&description[..story_end]);

    let benefit = benefit_idx.and_then(|b| {
        let start = b + BENEFIT_LABEL.len();
        let end = drawback_idx.unwrap_or(description.len());
        // A drawback written before the benefit leaves no benefit text.
        description.get(start..end).and_then(non_empty)
    });
    let drawback =
        drawback_idx.and_then(|d| non_empty(&description[d + DRAWBACK_LABEL.len()..]));

    if benefit.is_none() && drawback.is_none() {
        return (story.or_else(|| non_empty(description)), None);
    }

    (
        story,
        Some(ComplicationEffects {
            benefit,
            drawback,
            both: None,
        }),
    )
}

/// Reduce a legacy complication to id, type, name, story and effects.
pub fn simplify_complication(record: &Value) -> Complication {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or_else(|| {
        tracing::warn!("complication record is not an object: {}", record);
        &empty
    });

    let (description, effects) = split_description(get_text(fields, "description").unwrap_or(""));
    Complication {
        id: fields.get("id").cloned().unwrap_or(Value::Null),
        kind: "complication".to_string(),
        name: fields.get("name").cloned().unwrap_or(Value::Null),
        description,
        effects,
    }
}

/// Totals gathered while simplifying complications.
#[derive(Debug, Default)]
pub struct SimplifySummary {
    pub total_records: usize,
    pub with_effects: usize,
    pub story_only: usize,
}

impl SimplifySummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_complication(&mut self, complication: &Complication) {
        self.total_records += 1;
        if complication.effects.is_some() {
            self.with_effects += 1;
        } else {
            self.story_only += 1;
        }
    }
}

/// Simplify a batch, keeping record count and order.
pub fn simplify_complications(records: &[Value]) -> (Vec<Complication>, SimplifySummary) {
    let mut summary = SimplifySummary::new();
    let complications = records
        .iter()
        .map(|record| {
            let complication = simplify_complication(record);
            summary.add_complication(&complication);
            complication
        })
        .collect();
    (complications, summary)
}

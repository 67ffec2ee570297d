//! Final recommendation slots with deterministic reason strings.
//!
//! Reasons come from a fixed template keyed by score, event linkage,
//! and past-due state. No free text: the same inputs always render the
//! same line.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::{Score, ScoredSlot};

/// One recommended booking date, ready for display or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSlot {
    pub date: NaiveDate,
    pub reason: String,
    pub score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_event: Option<String>,
}

/// Render the reason line for a slot.
pub fn reason_for(
    score: Score,
    related_event: Option<&str>,
    interval_days: i64,
    past_due: bool,
) -> String {
    match (score, related_event, past_due) {
        (Score::Risky, Some(event), true) => {
            format!("You're overdue - book immediately before {event}")
        }
        (Score::Risky, None, true) => "You're overdue - book as soon as you can".to_string(),
        (Score::Optimal, Some(event), _) => format!("Perfectly timed before {event}"),
        (Score::Optimal, None, _) => {
            format!("Right on your natural {interval_days}-day cycle")
        }
        (Score::Good, Some(event), _) => format!("Keeps you sharp for {event}"),
        (Score::Good, None, _) => {
            format!("A solid touch-up point on your {interval_days}-day rhythm")
        }
        (Score::Risky, Some(event), false) => format!("Cutting it close for {event}"),
        (Score::Risky, None, false) => {
            "Off your usual rhythm - expect visible regrowth by then".to_string()
        }
    }
}

/// Attach reason strings. Order is preserved exactly as scored.
pub fn render(scored: Vec<ScoredSlot>) -> Vec<RecommendedSlot> {
    scored
        .into_iter()
        .map(|slot| RecommendedSlot {
            reason: reason_for(
                slot.score,
                slot.related_event.as_deref(),
                slot.interval_days,
                slot.past_due,
            ),
            date: slot.date,
            score: slot.score,
            related_event: slot.related_event,
        })
        .collect()
}

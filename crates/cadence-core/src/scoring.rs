//! Candidate scoring and ordering.
//!
//! Slots are classified against the client's cadence: too soon after
//! the preceding visit wastes money, too late shows visible regrowth,
//! and exactly one slot is promoted to the optimal pick.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::events::SlotDraft;

/// Three-tier classification of how well a date serves the cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Optimal,
    Good,
    Risky,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Score::Optimal => "optimal",
            Score::Good => "good",
            Score::Risky => "risky",
        };
        f.write_str(label)
    }
}

/// A draft slot with its score attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSlot {
    pub date: NaiveDate,
    pub interval_days: i64,
    pub score: Score,
    pub related_event: Option<String>,
    pub past_due: bool,
}

/// Score every draft and return them ordered ascending by date.
///
/// The gap from the preceding slot (the last visit, for the first one)
/// decides good versus risky; the earliest slot inside the optimal
/// window from the last visit becomes the single optimal pick, falling
/// back to the earliest slot not forced risky by a past-due event.
pub fn score_and_rank(
    mut drafts: Vec<SlotDraft>,
    last_visit: NaiveDate,
    config: &EngineConfig,
) -> Vec<ScoredSlot> {
    drafts.sort_by(|a, b| a.date.cmp(&b.date));

    let mut scored = Vec::with_capacity(drafts.len());
    let mut anchor = last_visit;
    for draft in drafts {
        let gap = (draft.date - anchor).num_days() as f64;
        let interval = draft.interval_days as f64;

        let score = if draft.past_due
            || gap < interval * config.risky_min
            || gap > interval * config.risky_max
        {
            Score::Risky
        } else {
            Score::Good
        };

        anchor = draft.date;
        scored.push(ScoredSlot {
            date: draft.date,
            interval_days: draft.interval_days,
            score,
            related_event: draft.related_event,
            past_due: draft.past_due,
        });
    }

    let in_optimal_window = |slot: &ScoredSlot| {
        let gap = (slot.date - last_visit).num_days() as f64;
        let interval = slot.interval_days as f64;
        gap >= interval * config.optimal_min && gap <= interval * config.optimal_max
    };

    let optimal = scored
        .iter()
        .position(|s| !s.past_due && in_optimal_window(s))
        .or_else(|| scored.iter().position(|s| !s.past_due));

    if let Some(idx) = optimal {
        scored[idx].score = Score::Optimal;
    }

    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(d: NaiveDate, interval: i64) -> SlotDraft {
        SlotDraft {
            date: d,
            interval_days: interval,
            related_event: None,
            past_due: false,
        }
    }

    #[test]
    fn earliest_in_window_slot_is_optimal() {
        let last_visit = date(2026, 1, 1);
        let drafts = vec![
            draft(date(2026, 1, 8), 7),
            draft(date(2026, 1, 15), 7),
            draft(date(2026, 1, 22), 7),
        ];

        let scored = score_and_rank(drafts, last_visit, &EngineConfig::default());

        assert_eq!(scored[0].score, Score::Optimal);
        assert_eq!(scored[1].score, Score::Good);
        assert_eq!(scored[2].score, Score::Good);
    }

    #[test]
    fn falls_back_to_earliest_slot_when_nothing_fits_the_window() {
        // A single slot three intervals out: outside [0.8i, 1.3i] and
        // outside [0.6i, 1.6i], but still promoted so the result has
        // exactly one optimal pick.
        let last_visit = date(2026, 1, 1);
        let drafts = vec![draft(date(2026, 1, 22), 7)];

        let scored = score_and_rank(drafts, last_visit, &EngineConfig::default());

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, Score::Optimal);
    }

    #[test]
    fn tight_gap_scores_risky() {
        // Second slot only 3 days after the first on a 7-day cadence.
        let last_visit = date(2026, 1, 1);
        let drafts = vec![draft(date(2026, 1, 8), 7), draft(date(2026, 1, 11), 7)];

        let scored = score_and_rank(drafts, last_visit, &EngineConfig::default());

        assert_eq!(scored[0].score, Score::Optimal);
        assert_eq!(scored[1].score, Score::Risky);
    }

    #[test]
    fn long_gap_scores_risky() {
        // Second slot 13 days after the first on a 7-day cadence.
        let last_visit = date(2026, 1, 1);
        let drafts = vec![draft(date(2026, 1, 8), 7), draft(date(2026, 1, 21), 7)];

        let scored = score_and_rank(drafts, last_visit, &EngineConfig::default());

        assert_eq!(scored[1].score, Score::Risky);
    }

    #[test]
    fn past_due_slots_stay_risky() {
        let last_visit = date(2026, 1, 1);
        let mut forced = draft(date(2026, 1, 8), 7);
        forced.related_event = Some("Wedding".to_string());
        forced.past_due = true;

        let scored = score_and_rank(vec![forced], last_visit, &EngineConfig::default());

        // In the optimal window, but the past-due flag wins and no
        // other slot exists to promote.
        assert_eq!(scored[0].score, Score::Risky);
    }

    #[test]
    fn output_is_sorted_ascending() {
        let last_visit = date(2026, 1, 1);
        let drafts = vec![
            draft(date(2026, 1, 22), 7),
            draft(date(2026, 1, 8), 7),
            draft(date(2026, 1, 15), 7),
        ];

        let scored = score_and_rank(drafts, last_visit, &EngineConfig::default());
        let dates: Vec<NaiveDate> = scored.iter().map(|s| s.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}

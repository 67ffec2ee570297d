//! Event-driven slot adjustment.
//!
//! Declared commitments pull candidates toward the event with a
//! freshness-dependent lead time. Event slots merge into nearby
//! cadence candidates instead of duplicating them, and an event whose
//! lead window has already passed produces a clamped, always-risky
//! slot for today.

use chrono::{Duration, NaiveDate};

use crate::cadence::RecurrenceCandidate;
use crate::profile::UpcomingEvent;

/// An event slot merges into a cadence candidate this many days away.
pub const EVENT_MERGE_WINDOW_DAYS: i64 = 2;

/// Days before an event that the cut should land. More fastidious
/// clients get closer-to-event timing.
pub fn lead_days(freshness_priority: i32) -> i64 {
    if freshness_priority >= 8 {
        1
    } else if freshness_priority >= 5 {
        2
    } else {
        3
    }
}

/// Pipeline unit between event adjustment and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDraft {
    pub date: NaiveDate,
    pub interval_days: i64,
    /// Label of the event this slot was adjusted for
    pub related_event: Option<String>,
    /// Set when the event's lead window had already passed and the
    /// slot was clamped to today; forces a risky score.
    pub past_due: bool,
}

/// Fold declared events into the recurrence candidates.
///
/// Events are processed in ascending date order. A slot already tied
/// to an earlier event is never displaced by a later one. An empty
/// candidate list is fine: a client whose last visit predates the
/// whole horizon still gets event-lead slots. `interval_days` is the
/// client's base interval, carried onto injected slots for scoring.
pub fn apply_events(
    candidates: &[RecurrenceCandidate],
    events: &[UpcomingEvent],
    freshness_priority: i32,
    interval_days: i64,
    today: NaiveDate,
) -> Vec<SlotDraft> {
    let mut drafts: Vec<SlotDraft> = candidates
        .iter()
        .map(|c| SlotDraft {
            date: c.date,
            interval_days: c.interval_days,
            related_event: None,
            past_due: false,
        })
        .collect();

    let lead = lead_days(freshness_priority);

    let mut ordered: Vec<&UpcomingEvent> = events.iter().collect();
    ordered.sort_by_key(|e| e.date);

    for event in ordered {
        let mut target = event.date - Duration::days(lead);
        let mut past_due = false;
        if target < today {
            // The client is already late for this event.
            target = today;
            past_due = true;
        }

        let nearby = drafts
            .iter_mut()
            .filter(|d| d.related_event.is_none())
            .map(|d| ((d.date - target).num_days().abs(), d))
            .filter(|(distance, _)| *distance <= EVENT_MERGE_WINDOW_DAYS)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, d)| d);

        if let Some(existing) = nearby {
            if target < existing.date {
                existing.date = target;
            }
            existing.related_event = Some(event.label.clone());
            existing.past_due = past_due;
        } else if !drafts.iter().any(|d| d.date == target) {
            drafts.push(SlotDraft {
                date: target,
                interval_days,
                related_event: Some(event.label.clone()),
                past_due,
            });
        }
    }

    drafts.sort_by(|a, b| a.date.cmp(&b.date));
    drafts
}

//! Baseline recurrence generation.
//!
//! Turns a growth rate into a visit interval and walks that interval
//! forward from the last visit, steering each candidate toward the
//! client's preferred part of the week.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::profile::{ClientProfile, GrowthRate, WeeklyRhythm};

/// Default planning horizon, measured from the last visit.
pub const DEFAULT_HORIZON_DAYS: i64 = 60;

/// Furthest a candidate may move to land on a preferred weekday.
const MAX_RHYTHM_SHIFT_DAYS: i64 = 3;

/// Base rebooking interval in days for a growth rate.
pub fn base_interval(rate: GrowthRate) -> i64 {
    match rate {
        GrowthRate::Fast => 7,
        GrowthRate::Average => 17,
        GrowthRate::Slow => 30,
    }
}

/// An unscored, unadjusted next-visit date derived purely from cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceCandidate {
    pub date: NaiveDate,
    /// The base interval that produced this candidate
    pub interval_days: i64,
    /// The interval multiplier k, starting at 1
    pub step: u32,
}

/// Generate recurrence candidates at `last_visit + k * interval` for
/// every k whose date stays within `last_visit + horizon_days`.
///
/// Candidates strictly before `today` are dropped, not shifted
/// forward; a shift never lands before `today`, never crosses the next
/// raw candidate, and same-date collisions keep the smaller step.
pub fn generate_recurrence(
    profile: &ClientProfile,
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<RecurrenceCandidate> {
    let interval = base_interval(profile.growth_rate);
    let horizon_end = profile.last_visit_date + Duration::days(horizon_days);

    let mut raw = Vec::new();
    let mut step: u32 = 1;
    loop {
        let date = profile.last_visit_date + Duration::days(interval * i64::from(step));
        if date > horizon_end {
            break;
        }
        raw.push(RecurrenceCandidate {
            date,
            interval_days: interval,
            step,
        });
        step += 1;
    }

    let mut shifted: Vec<RecurrenceCandidate> = raw
        .iter()
        .enumerate()
        .map(|(i, cand)| {
            let next_raw = raw.get(i + 1).map(|c| c.date);
            RecurrenceCandidate {
                date: shift_for_rhythm(cand.date, profile.weekly_rhythm, today, next_raw),
                ..*cand
            }
        })
        .collect();

    shifted.retain(|c| c.date >= today);
    shifted.sort_by_key(|c| (c.date, c.step));
    shifted.dedup_by_key(|c| c.date);
    shifted
}

/// Move a candidate to the nearest preferred weekday, at most
/// [`MAX_RHYTHM_SHIFT_DAYS`] away. Ties go to the earlier-listed day.
/// Returns the date unchanged when no legal target exists.
fn shift_for_rhythm(
    date: NaiveDate,
    rhythm: WeeklyRhythm,
    today: NaiveDate,
    next_raw: Option<NaiveDate>,
) -> NaiveDate {
    let targets: &[Weekday] = match rhythm {
        WeeklyRhythm::Consistent => return date,
        WeeklyRhythm::BusyMidweek => &[Weekday::Mon, Weekday::Tue],
        WeeklyRhythm::SocialWeekend => &[Weekday::Thu, Weekday::Fri],
    };

    let mut best: Option<(i64, NaiveDate)> = None;
    for &target in targets {
        let Some(delta) = days_to_weekday(date, target) else {
            continue;
        };
        let candidate = date + Duration::days(delta);
        if candidate < today {
            continue;
        }
        if let Some(next) = next_raw {
            if candidate >= next {
                continue;
            }
        }
        if best.map_or(true, |(dist, _)| delta.abs() < dist) {
            best = Some((delta.abs(), candidate));
        }
    }

    best.map_or(date, |(_, d)| d)
}

/// Signed day offset from `date` to the closest occurrence of
/// `target`, if it lies within the shift window.
fn days_to_weekday(date: NaiveDate, target: Weekday) -> Option<i64> {
    let current = i64::from(date.weekday().num_days_from_monday());
    let wanted = i64::from(target.num_days_from_monday());

    let mut delta = wanted - current;
    if delta > MAX_RHYTHM_SHIFT_DAYS {
        delta -= 7;
    }
    if delta < -MAX_RHYTHM_SHIFT_DAYS {
        delta += 7;
    }

    (delta.abs() <= MAX_RHYTHM_SHIFT_DAYS).then_some(delta)
}

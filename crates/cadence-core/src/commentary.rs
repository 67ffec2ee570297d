//! Strategist commentary.
//!
//! A short trusted-advisor summary of the current plan, rendered from
//! fixed templates over the profile and the optimal slot.

use crate::profile::{ClientProfile, GrowthRate, WeeklyRhythm};
use crate::scoring::Score;
use crate::slots::RecommendedSlot;

fn cycle_phrase(rate: GrowthRate) -> &'static str {
    match rate {
        GrowthRate::Fast => "a tight weekly cycle",
        GrowthRate::Average => "a steady two-to-three week cycle",
        GrowthRate::Slow => "a relaxed monthly cycle",
    }
}

fn rhythm_phrase(rhythm: WeeklyRhythm) -> &'static str {
    match rhythm {
        WeeklyRhythm::BusyMidweek => "early-week appointments that fit around your work schedule",
        WeeklyRhythm::SocialWeekend => "late-week appointments so you walk into every weekend sharp",
        WeeklyRhythm::Consistent => "a consistent rhythm on whichever day suits you",
    }
}

/// Two-sentence plan summary for the client dashboard.
pub fn strategist_commentary(profile: &ClientProfile, slots: &[RecommendedSlot]) -> String {
    let name = profile.first_name();
    let cycle = cycle_phrase(profile.growth_rate);
    let rhythm = rhythm_phrase(profile.weekly_rhythm);

    match slots.iter().find(|s| s.score == Score::Optimal) {
        Some(best) => format!(
            "{name}, your growth puts you on {cycle}, and your lifestyle calls for {rhythm}. \
             Your best window is {} - lock it in and you'll stay sharp for what matters.",
            best.date.format("%B %-d")
        ),
        None => format!(
            "{name}, your growth puts you on {cycle}, and your lifestyle calls for {rhythm}. \
             You're past due right now - take the first slot you can and we'll reset the rhythm from there."
        ),
    }
}

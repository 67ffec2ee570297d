//! Client lifestyle profiles and input normalization.
//!
//! A profile arrives as loosely-typed quiz answers ([`RawProfile`]) and
//! is validated into a [`ClientProfile`] before anything else runs.
//! Normalization is pure: "today" is an argument, never read from the
//! system clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How quickly the client's hair grows out of shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthRate {
    Slow,
    Average,
    Fast,
}

impl GrowthRate {
    /// Parse a quiz answer. Accepts the lowercase wire values.
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim() {
            "slow" => Some(GrowthRate::Slow),
            "average" => Some(GrowthRate::Average),
            "fast" => Some(GrowthRate::Fast),
            _ => None,
        }
    }
}

/// The client's weekly lifestyle pattern, used to steer candidate
/// dates toward a preferred part of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeeklyRhythm {
    /// Work peaks midweek; cuts land on Monday or Tuesday
    BusyMidweek,
    /// Social weekends; cuts land on Thursday or Friday
    SocialWeekend,
    /// No weekday preference
    Consistent,
}

impl WeeklyRhythm {
    /// Parse a quiz answer. Accepts the kebab-case wire values.
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim() {
            "busy-midweek" => Some(WeeklyRhythm::BusyMidweek),
            "social-weekend" => Some(WeeklyRhythm::SocialWeekend),
            "consistent" => Some(WeeklyRhythm::Consistent),
            _ => None,
        }
    }
}

/// Hair type from the quiz. Informational only; the cadence is driven
/// by growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairType {
    Straight,
    Wavy,
    Curly,
    Coily,
}

impl HairType {
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim() {
            "straight" => Some(HairType::Straight),
            "wavy" => Some(HairType::Wavy),
            "curly" => Some(HairType::Curly),
            "coily" => Some(HairType::Coily),
            _ => None,
        }
    }
}

/// A commitment the client wants to look fresh for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    pub date: NaiveDate,
    pub label: String,
}

impl UpcomingEvent {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

fn default_freshness() -> i32 {
    5
}

/// Unvalidated profile input, as it arrives from the quiz form or a
/// JSON file. Field names match the client-side wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub name: String,
    #[serde(default)]
    pub hair_type: Option<String>,
    #[serde(default)]
    pub preferred_style: Option<String>,
    pub growth_rate: String,
    pub weekly_rhythm: String,
    #[serde(default = "default_freshness")]
    pub freshness_priority: i32,
    pub last_visit_date: NaiveDate,
    #[serde(default)]
    pub upcoming_events: Vec<UpcomingEvent>,
}

impl RawProfile {
    /// Parse a raw profile from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A validated, canonicalized client profile. Construct via
/// [`ClientProfile::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_type: Option<HairType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_style: Option<String>,
    pub growth_rate: GrowthRate,
    pub weekly_rhythm: WeeklyRhythm,
    /// Risk tolerance, clamped to 1..=10. Higher means the client
    /// wants to be freshly cut right before their events.
    pub freshness_priority: i32,
    pub last_visit_date: NaiveDate,
    /// Declared commitments, sorted ascending by date.
    pub upcoming_events: Vec<UpcomingEvent>,
}

impl ClientProfile {
    /// Validate and canonicalize quiz answers.
    ///
    /// Fails when the name is empty, the last visit lies in the
    /// future, or an enum field holds an unrecognized value. The
    /// freshness priority is clamped rather than rejected.
    pub fn normalize(raw: &RawProfile, today: NaiveDate) -> Result<Self, ValidationError> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingValue { field: "name" });
        }

        if raw.last_visit_date > today {
            return Err(ValidationError::FutureDate {
                field: "lastVisitDate",
                date: raw.last_visit_date,
                today,
            });
        }

        let growth_rate = GrowthRate::from_input(&raw.growth_rate).ok_or_else(|| {
            ValidationError::InvalidValue {
                field: "growthRate",
                message: format!("unrecognized value '{}'", raw.growth_rate),
            }
        })?;

        let weekly_rhythm = WeeklyRhythm::from_input(&raw.weekly_rhythm).ok_or_else(|| {
            ValidationError::InvalidValue {
                field: "weeklyRhythm",
                message: format!("unrecognized value '{}'", raw.weekly_rhythm),
            }
        })?;

        let hair_type = match raw.hair_type.as_deref() {
            None => None,
            Some(value) => Some(HairType::from_input(value).ok_or_else(|| {
                ValidationError::InvalidValue {
                    field: "hairType",
                    message: format!("unrecognized value '{value}'"),
                }
            })?),
        };

        let mut upcoming_events = raw.upcoming_events.clone();
        upcoming_events.sort_by(|a, b| a.date.cmp(&b.date));

        Ok(Self {
            name: name.to_string(),
            hair_type,
            preferred_style: raw
                .preferred_style
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            growth_rate,
            weekly_rhythm,
            freshness_priority: raw.freshness_priority.clamp(1, 10),
            last_visit_date: raw.last_visit_date,
            upcoming_events,
        })
    }

    /// Days elapsed since the last visit.
    pub fn days_since_last_visit(&self, today: NaiveDate) -> i64 {
        (today - self.last_visit_date).num_days()
    }

    /// First name, for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw() -> RawProfile {
        RawProfile {
            name: "Marcus Johnson".to_string(),
            hair_type: Some("curly".to_string()),
            preferred_style: Some("Skin fade".to_string()),
            growth_rate: "fast".to_string(),
            weekly_rhythm: "social-weekend".to_string(),
            freshness_priority: 9,
            last_visit_date: date(2026, 1, 1),
            upcoming_events: vec![
                UpcomingEvent::new(date(2026, 1, 25), "Wedding (guest)"),
                UpcomingEvent::new(date(2026, 1, 10), "Job interview"),
            ],
        }
    }

    #[test]
    fn normalize_accepts_valid_profile() {
        let profile = ClientProfile::normalize(&raw(), date(2026, 1, 6)).unwrap();

        assert_eq!(profile.name, "Marcus Johnson");
        assert_eq!(profile.growth_rate, GrowthRate::Fast);
        assert_eq!(profile.weekly_rhythm, WeeklyRhythm::SocialWeekend);
        assert_eq!(profile.hair_type, Some(HairType::Curly));
        assert_eq!(profile.freshness_priority, 9);
    }

    #[test]
    fn normalize_sorts_events_ascending() {
        let profile = ClientProfile::normalize(&raw(), date(2026, 1, 6)).unwrap();

        assert_eq!(profile.upcoming_events[0].label, "Job interview");
        assert_eq!(profile.upcoming_events[1].label, "Wedding (guest)");
    }

    #[test]
    fn normalize_rejects_empty_name() {
        let mut input = raw();
        input.name = "   ".to_string();

        let err = ClientProfile::normalize(&input, date(2026, 1, 6)).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn normalize_rejects_future_last_visit() {
        let mut input = raw();
        input.last_visit_date = date(2026, 2, 1);

        let err = ClientProfile::normalize(&input, date(2026, 1, 6)).unwrap_err();
        assert_eq!(err.field(), "lastVisitDate");
    }

    #[test]
    fn normalize_rejects_unknown_growth_rate() {
        let mut input = raw();
        input.growth_rate = "hyper".to_string();

        let err = ClientProfile::normalize(&input, date(2026, 1, 6)).unwrap_err();
        assert_eq!(err.field(), "growthRate");
    }

    #[test]
    fn normalize_rejects_unknown_rhythm() {
        let mut input = raw();
        input.weekly_rhythm = "nocturnal".to_string();

        let err = ClientProfile::normalize(&input, date(2026, 1, 6)).unwrap_err();
        assert_eq!(err.field(), "weeklyRhythm");
    }

    #[test]
    fn normalize_clamps_freshness_priority() {
        let mut input = raw();
        input.freshness_priority = 42;
        let profile = ClientProfile::normalize(&input, date(2026, 1, 6)).unwrap();
        assert_eq!(profile.freshness_priority, 10);

        input.freshness_priority = -3;
        let profile = ClientProfile::normalize(&input, date(2026, 1, 6)).unwrap();
        assert_eq!(profile.freshness_priority, 1);
    }

    #[test]
    fn raw_profile_round_trips_through_json() {
        let json = r#"{
            "name": "Tyler Chen",
            "growthRate": "average",
            "weeklyRhythm": "busy-midweek",
            "freshnessPriority": 8,
            "lastVisitDate": "2026-01-02",
            "upcomingEvents": [
                { "date": "2026-01-15", "label": "Investor pitch" }
            ]
        }"#;

        let parsed = RawProfile::from_json(json).unwrap();
        assert_eq!(parsed.name, "Tyler Chen");
        assert_eq!(parsed.upcoming_events.len(), 1);
        assert!(parsed.hair_type.is_none());

        let profile = ClientProfile::normalize(&parsed, date(2026, 1, 6)).unwrap();
        assert_eq!(profile.growth_rate, GrowthRate::Average);
        assert_eq!(profile.weekly_rhythm, WeeklyRhythm::BusyMidweek);
    }
}

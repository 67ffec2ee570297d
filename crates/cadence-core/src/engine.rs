//! End-to-end recommendation pipeline.
//!
//! `Engine` composes normalization, recurrence, event adjustment,
//! scoring, and rendering into a single pure call. "Today" is always
//! supplied by the caller so two identical calls produce identical
//! output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cadence::{self, DEFAULT_HORIZON_DAYS};
use crate::error::{EngineError, Result};
use crate::events::apply_events;
use crate::profile::{ClientProfile, RawProfile};
use crate::scoring::score_and_rank;
use crate::slots::{render, RecommendedSlot};

/// Tuning knobs for the pipeline. The window multipliers are a
/// starting policy, not a hard rule; callers may override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Planning horizon in days, measured from the last visit
    pub horizon_days: i64,
    /// Lower bound of the optimal window, as a fraction of the interval
    pub optimal_min: f64,
    /// Upper bound of the optimal window
    pub optimal_max: f64,
    /// Below this fraction of the interval a gap is wastefully soon
    pub risky_min: f64,
    /// Above this fraction of the interval regrowth is clearly visible
    pub risky_max: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            optimal_min: 0.8,
            optimal_max: 1.3,
            risky_min: 0.6,
            risky_max: 1.6,
        }
    }
}

impl EngineConfig {
    /// Set a custom planning horizon.
    pub fn with_horizon_days(mut self, days: i64) -> Self {
        self.horizon_days = days;
        self
    }

    /// Set the optimal window multipliers.
    pub fn with_optimal_window(mut self, min: f64, max: f64) -> Self {
        self.optimal_min = min;
        self.optimal_max = max;
        self
    }

    /// Set the risky window multipliers.
    pub fn with_risky_window(mut self, min: f64, max: f64) -> Self {
        self.risky_min = min;
        self.risky_max = max;
        self
    }
}

/// Deterministic slot recommendation engine.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default tuning.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create with custom tuning.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Current tuning.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline over raw quiz answers.
    pub fn generate(&self, raw: &RawProfile, today: NaiveDate) -> Result<Vec<RecommendedSlot>> {
        let profile = ClientProfile::normalize(raw, today)?;
        self.generate_for(&profile, today)
    }

    /// Run the pipeline over an already-normalized profile.
    pub fn generate_for(
        &self,
        profile: &ClientProfile,
        today: NaiveDate,
    ) -> Result<Vec<RecommendedSlot>> {
        let interval_days = cadence::base_interval(profile.growth_rate);
        let candidates = cadence::generate_recurrence(profile, today, self.config.horizon_days);
        let drafts = apply_events(
            &candidates,
            &profile.upcoming_events,
            profile.freshness_priority,
            interval_days,
            today,
        );

        // Declared events can rescue an otherwise-exhausted horizon,
        // so emptiness is judged after adjustment, not before.
        if drafts.is_empty() {
            return Err(EngineError::EmptyHorizon {
                interval_days,
                horizon_days: self.config.horizon_days,
            });
        }

        let scored = score_and_rank(drafts, profile.last_visit_date, &self.config);
        Ok(render(scored))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

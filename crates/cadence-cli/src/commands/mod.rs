//! CLI subcommands.

pub mod commentary;
pub mod profile;
pub mod recommend;

use std::path::Path;

use chrono::{Local, NaiveDate};
use cadence_core::{EngineConfig, RawProfile};

/// Load a raw profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<RawProfile, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(RawProfile::from_json(&json)?)
}

/// The injected "today": an explicit override or the system date.
pub fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Engine tuning from an optional TOML file; defaults when absent.
pub fn load_engine_config(
    path: Option<&Path>,
) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use clap::Subcommand;

use cadence_core::{ClientProfile, RawProfile, UpcomingEvent};

use super::{load_profile, today_or};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print a sample profile JSON document
    Example {
        /// Anchor the sample's dates to this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Validate a profile file and print the normalized form
    Validate {
        /// Path to a profile JSON file
        #[arg(short, long)]
        profile: PathBuf,

        /// Validate as of this date instead of the system date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn example_profile(today: NaiveDate) -> RawProfile {
    RawProfile {
        name: "Marcus Johnson".to_string(),
        hair_type: Some("curly".to_string()),
        preferred_style: Some("Skin fade".to_string()),
        growth_rate: "fast".to_string(),
        weekly_rhythm: "social-weekend".to_string(),
        freshness_priority: 8,
        last_visit_date: today - Duration::days(10),
        upcoming_events: vec![
            UpcomingEvent::new(today + Duration::days(9), "Job interview"),
            UpcomingEvent::new(today + Duration::days(24), "Wedding (guest)"),
        ],
    }
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Example { today } => {
            let sample = example_profile(today_or(today));
            println!("{}", serde_json::to_string_pretty(&sample)?);
        }
        ProfileAction::Validate { profile, today } => {
            let raw = load_profile(&profile)?;
            let normalized = ClientProfile::normalize(&raw, today_or(today))?;
            println!("{}", serde_json::to_string_pretty(&normalized)?);
        }
    }
    Ok(())
}

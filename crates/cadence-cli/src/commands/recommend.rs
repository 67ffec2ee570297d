use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use cadence_core::{Engine, Score};

use super::{load_engine_config, load_profile, today_or};

#[derive(Args)]
pub struct RecommendArgs {
    /// Path to a profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Plan as of this date instead of the system date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Engine tuning overrides (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = load_profile(&args.profile)?;
    let today = today_or(args.today);
    let config = load_engine_config(args.config.as_deref())?;

    let slots = Engine::with_config(config).generate(&raw, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    for slot in &slots {
        let marker = match slot.score {
            Score::Optimal => "*",
            Score::Good => " ",
            Score::Risky => "!",
        };
        println!(
            "{marker} {}  {}  [{}]  {}",
            slot.date.format("%a"),
            slot.date,
            slot.score,
            slot.reason
        );
    }
    Ok(())
}

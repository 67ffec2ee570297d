use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use cadence_core::{ClientProfile, Engine, strategist_commentary};

use super::{load_engine_config, load_profile, today_or};

#[derive(Args)]
pub struct CommentaryArgs {
    /// Path to a profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Plan as of this date instead of the system date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Engine tuning overrides (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CommentaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = load_profile(&args.profile)?;
    let today = today_or(args.today);
    let config = load_engine_config(args.config.as_deref())?;

    let profile = ClientProfile::normalize(&raw, today)?;
    let slots = Engine::with_config(config).generate_for(&profile, today)?;

    println!("{}", strategist_commentary(&profile, &slots));
    Ok(())
}

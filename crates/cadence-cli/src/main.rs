use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cadence", version, about = "Cadence CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate recommended booking dates for a profile
    Recommend(commands::recommend::RecommendArgs),
    /// Print the strategist summary for a profile
    Commentary(commands::commentary::CommentaryArgs),
    /// Profile helpers
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Commentary(args) => commands::commentary::run(args),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cadence", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

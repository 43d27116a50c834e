use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mindmate", version, about = "MindMate CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit streaks and momentum
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Written journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Visual journal (image references with captions)
    Visual {
        #[command(subcommand)]
        action: commands::visual::VisualAction,
    },
    #[command(flatten)]
    Companion(commands::companion::CompanionAction),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MINDMATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mindmate starting");
    let result = match cli.command {
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Visual { action } => commands::visual::run(action),
        Commands::Companion(action) => commands::companion::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mindmate", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

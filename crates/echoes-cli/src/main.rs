//! CLI frontend for *Echoes of the Forgotten Tower*.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "echoes",
    about = "Echoes of the Forgotten Tower — a branching narrative",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the script's structure and report content statistics
    Check,

    /// Show content statistics for the script
    Stats,

    /// Show which endings a save file has unlocked
    Endings {
        /// Path to the save file
        #[arg(short, long, default_value = "echoes-save.json")]
        save: PathBuf,
    },

    /// Play the story in the terminal
    Play {
        /// Path to the save file (created on the first ending)
        #[arg(short, long, default_value = "echoes-save.json")]
        save: PathBuf,

        /// Player name (prompted for if omitted)
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check => commands::check::run(),
        Commands::Stats => commands::stats::run(),
        Commands::Endings { save } => commands::endings::run(&save),
        Commands::Play { save, name } => commands::play::run(&save, name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

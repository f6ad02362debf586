//! CLI frontend for inspecting the derived Hearthvale world.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hv",
    about = "Hearthvale — inspect the derived world-content catalog",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List locations with their resolved vendor types and board counts
    Locations,

    /// Show resolved vendor tags for every location and business
    Vendors,

    /// Show the quest boards of one location
    Boards {
        /// Location name (case-insensitive)
        location: String,
    },

    /// Show one posted quest in full
    Quest {
        /// Location name (case-insensitive)
        location: String,

        /// Quest title (case-insensitive)
        title: String,
    },

    /// Simulate gathering attempts and print the proficiency progression
    Train {
        /// Gathering skill, e.g. mining, logging, herbalism
        skill: String,

        /// Character level
        #[arg(short, long, default_value = "1")]
        level: u32,

        /// Strength score
        #[arg(long, default_value = "10")]
        strength: f64,

        /// Dexterity score
        #[arg(long, default_value = "10")]
        dexterity: f64,

        /// Constitution score
        #[arg(long, default_value = "10")]
        constitution: f64,

        /// Intelligence score
        #[arg(long, default_value = "10")]
        intelligence: f64,

        /// Wisdom score
        #[arg(long, default_value = "10")]
        wisdom: f64,

        /// Number of successful attempts to simulate
        #[arg(short, long, default_value = "10")]
        attempts: u32,
    },

    /// Dump the derived world as JSON
    Export,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Locations => commands::locations::run(),
        Commands::Vendors => commands::vendors::run(),
        Commands::Boards { location } => commands::boards::run(&location),
        Commands::Quest { location, title } => commands::quest::run(&location, &title),
        Commands::Train {
            skill,
            level,
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            attempts,
        } => commands::train::run(
            &skill,
            level,
            [strength, dexterity, constitution, intelligence, wisdom],
            attempts,
        ),
        Commands::Export => commands::export::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

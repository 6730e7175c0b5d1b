use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use profman::{
    commands,
    manifest::Manifest,
    paths::Paths,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "profman")]
#[command(about = "Manifest-driven profile switcher - back up, restore, and swap sets of config files")]
#[command(version)]
struct Cli {
    /// Path to the manifest file
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "manifest.json"
    )]
    manifest: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all profiles defined in the manifest
    List,

    /// Show the active profile and pointer-file status
    Current,

    /// Back up a profile's live files into its backup store
    Backup {
        /// Profile to back up (default: the active profile)
        #[arg(long)]
        profile: Option<String>,
    },

    /// Restore a profile's backup to the live locations
    Restore {
        /// Profile to restore (default: the active profile)
        #[arg(long)]
        profile: Option<String>,
    },

    /// Switch profiles: back up the current one, then restore the target
    Switch {
        /// Profile to switch to
        #[arg(long)]
        profile: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let ui = Ui::new(cli.color, cli.no_color);

    // Every command needs the manifest; failing to load it aborts before any
    // side effect.
    let manifest = Manifest::load(&cli.manifest)?;

    match cli.command {
        Commands::List => commands::list(&paths, &manifest, &ui),
        Commands::Current => commands::current(&paths, &manifest, &ui),
        Commands::Backup { profile } => {
            commands::backup(&paths, &manifest, profile.as_deref(), &ui)
        }
        Commands::Restore { profile } => {
            commands::restore(&paths, &manifest, profile.as_deref(), &ui)
        }
        Commands::Switch { profile } => commands::switch(&paths, &manifest, &profile, &ui),
    }
}

//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vaultport")]
#[command(about = "Obsidian vault to Astro content migrator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a vaultport.toml with default paths
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Migrate the vault into the Astro content directory
    Migrate {
        /// Directory containing vaultport.toml (default: current directory)
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Show what would be migrated without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

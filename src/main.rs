use clap::Parser;
use vaultport::application::{migrate_vault, InitService, MigrateOptions};
use vaultport::cli::output::format_migration_report;
use vaultport::cli::{Cli, Commands};
use vaultport::error::VaultportError;
use vaultport::infrastructure::{Config, FsCollector};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), VaultportError> {
    match cli.command {
        Commands::Init { path } => InitService::execute(&path),
        Commands::Migrate { config, dry_run } => {
            let config = Config::load_from_dir(&config)?;
            let collector = FsCollector::new();
            let report = migrate_vault(&collector, &config, MigrateOptions { dry_run })?;
            print!("{}", format_migration_report(&report));
            Ok(())
        }
    }
}

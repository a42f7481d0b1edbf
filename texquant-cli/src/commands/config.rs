//! Config command - inspect or create the configuration file.

use clap::Subcommand;

use texquant::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config action subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file if none exists
    Init,
    /// Show the effective configuration
    Show,
}

/// Run a config subcommand.
pub fn run(action: ConfigAction) -> Result<(), CliError> {
    let path = config_file_path();

    match action {
        ConfigAction::Init => {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
                return Ok(());
            }

            ConfigFile::default()
                .save()
                .map_err(|e| CliError::Config(e.to_string()))?;

            println!("Configuration file: {}", path.display());
            println!();
            println!("Edit this file to customize TexQuant defaults.");
            println!("CLI arguments override config file values when specified.");
            Ok(())
        }
        ConfigAction::Show => {
            let config = ConfigFile::load().unwrap_or_default();

            println!("Configuration file: {}", path.display());
            if !path.exists() {
                println!("  (not present, showing defaults)");
            }
            println!();
            println!("[convert]");
            println!("mode = {}", config.convert.mode.name());
            println!("threads = {}", config.convert.threads);
            match &config.convert.output_dir {
                Some(dir) => println!("output_dir = {}", dir.display()),
                None => println!("# output_dir unset: sources are overwritten in place"),
            }
            Ok(())
        }
    }
}

//! Shared state for command execution.

use std::path::Path;
use std::process::ExitCode;

use lokey_config::Config;
use lokey_geo::{GeoTables, LocationResolver};

/// Configuration and lookup tables shared by every command.
pub struct CommandContext {
    /// Merged configuration.
    pub config: Config,
    /// Geographic lookup tables.
    pub tables: GeoTables,
}

impl CommandContext {
    /// Loads configuration and builds the lookup tables.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ExitCode> {
        match config_path {
            Some(path) => log::debug!("loading configuration from {}", path.display()),
            None => log::debug!("using default configuration"),
        }
        let config = match Config::load(config_path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return Err(ExitCode::FAILURE);
            }
        };
        Ok(CommandContext {
            config,
            tables: GeoTables::default(),
        })
    }

    /// A resolver over a fresh copy of the tables.
    pub fn resolver(&self) -> LocationResolver {
        LocationResolver::new(self.tables.clone())
    }
}

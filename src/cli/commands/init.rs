//! Init and Config commands.

use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Run init command - create configuration file at `path`.
pub fn run_init(out: &mut impl Write, path: &Path, force: bool) -> Result<()> {
    let path = Settings::init_config_file(path, force)?;
    writeln!(out, "Created configuration file at: {}", path.display())?;
    writeln!(out, "Edit this file to customize your settings.")?;
    Ok(())
}

/// Run config command - display current configuration.
pub fn run_config(out: &mut impl Write, config: &Settings) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    writeln!(out, "Current Configuration:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{toml_str}")?;
    Ok(())
}

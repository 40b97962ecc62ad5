use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use super::print_success;
use crate::config::Config;

/// Run the init command
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    if Config::exists(config_path) && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it or pass a different --config path.",
            config_path.display()
        );
    }

    Config::default().save(config_path)?;

    info!("Config initialized at {}", config_path.display());
    print_success(&format!("Config saved to: {}", config_path.display()));
    println!("\nNext steps:");
    println!("  1. Edit [ticket] in the config to pick your numbers");
    println!("  2. Run 'pbs-sim buy' or 'pbs-sim interactive'");

    Ok(())
}

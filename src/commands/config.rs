//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Validate and store a single value

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;

    if json {
        return print_json(&json!({
            "endpoint": config.endpoint(),
            "limit": config.limit,
            "timeout": config.request_timeout,
            "like_window": config.like_window,
            "config_file": Config::config_path().to_string_lossy(),
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}: {}", "endpoint".cyan(), config.endpoint());
    println!("{}: {}", "limit".cyan(), config.limit);
    println!("{}: {}s", "timeout".cyan(), config.request_timeout);
    println!("{}: {}s", "like_window".cyan(), config.like_window);
    println!(
        "\n{}: {}",
        "config_file".dimmed(),
        Config::config_path().display()
    );
    Ok(())
}

/// Get a configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("Set {} = {}", key.cyan(), config.get(key)?);
    Ok(())
}

mod browse;
mod config;
mod list;
mod theme;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use list::{ListOptions, cmd_list, render_table};
pub use theme::{cmd_theme_set, cmd_theme_show, cmd_theme_toggle};

use crate::error::Result;

/// Print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

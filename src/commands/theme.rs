//! Dark mode preference commands.
//!
//! - `theme show`: Print the stored value
//! - `theme toggle`: Flip and store
//! - `theme set`: Store an explicit value

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::error::Result;
use crate::prefs::{FileStore, ThemePreference, ThemeValue};

pub fn cmd_theme_show(json: bool) -> Result<()> {
    let store = FileStore::open_default();
    let pref = ThemePreference::load(&store)?;

    if json {
        print_json(&json!({
            "dark_mode": pref.is_dark(),
            "value": pref.as_str(),
            "storage_file": store.path().to_string_lossy(),
        }))
    } else {
        println!("{}", pref.as_str());
        Ok(())
    }
}

pub fn cmd_theme_toggle() -> Result<()> {
    let mut store = FileStore::open_default();
    let mut pref = ThemePreference::load(&store)?;
    pref.toggle(&mut store)?;

    println!("Dark mode {}", describe(pref.value()));
    Ok(())
}

pub fn cmd_theme_set(value: ThemeValue) -> Result<()> {
    let mut store = FileStore::open_default();
    let mut pref = ThemePreference::load(&store)?;
    pref.set(&mut store, value.is_dark())?;

    println!("Dark mode {}", describe(pref.value()));
    Ok(())
}

fn describe(value: ThemeValue) -> String {
    match value {
        ThemeValue::Enabled => value.to_string().green().to_string(),
        ThemeValue::Disabled => value.to_string().dimmed().to_string(),
    }
}

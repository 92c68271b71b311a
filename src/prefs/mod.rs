//! Dark mode preference.
//!
//! Read once at startup and written back on every change. Anything other
//! than the literal `"enabled"` reads as light mode.

pub mod store;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StorefrontError};

pub use store::{FileStore, MemoryStore, PreferenceStore};

/// Storage key holding the dark mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

const ENABLED: &str = "enabled";
const DISABLED: &str = "disabled";

/// A stored theme value, as accepted by `theme set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeValue {
    Enabled,
    Disabled,
}

impl ThemeValue {
    pub fn is_dark(self) -> bool {
        self == ThemeValue::Enabled
    }
}

impl From<bool> for ThemeValue {
    fn from(dark: bool) -> Self {
        if dark {
            ThemeValue::Enabled
        } else {
            ThemeValue::Disabled
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Enabled => write!(f, "{ENABLED}"),
            ThemeValue::Disabled => write!(f, "{DISABLED}"),
        }
    }
}

impl FromStr for ThemeValue {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            ENABLED => Ok(ThemeValue::Enabled),
            DISABLED => Ok(ThemeValue::Disabled),
            _ => Err(StorefrontError::InvalidThemeValue(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    dark: bool,
}

impl ThemePreference {
    /// Read the stored flag. Only an exact `"enabled"` turns dark mode on.
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        let stored = store.get(DARK_MODE_KEY)?;
        Ok(Self {
            dark: stored.as_deref() == Some(ENABLED),
        })
    }

    /// Read the stored flag and write back its normalized value
    pub fn load_and_normalize(store: &mut dyn PreferenceStore) -> Result<Self> {
        let pref = Self::load(&*store)?;
        pref.persist(store)?;
        Ok(pref)
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn value(&self) -> ThemeValue {
        ThemeValue::from(self.dark)
    }

    /// Stored representation: `"enabled"` or `"disabled"`
    pub fn as_str(&self) -> &'static str {
        if self.dark { ENABLED } else { DISABLED }
    }

    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Result<()> {
        self.set(store, !self.dark)
    }

    pub fn set(&mut self, store: &mut dyn PreferenceStore, dark: bool) -> Result<()> {
        self.dark = dark;
        tracing::debug!(dark, "theme preference changed");
        self.persist(store)
    }

    pub fn persist(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(DARK_MODE_KEY, self.as_str())
    }
}

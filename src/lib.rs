#[macro_use]
mod macros;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod likes;
pub mod logging;
pub mod paths;
pub mod prefs;
pub mod tui;
pub mod view;

pub use catalog::{CatalogLoader, CatalogSource, HttpCatalogSource, Product, ProductId};
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use likes::{Clock, DEFAULT_LIKE_WINDOW, LikeTracker, ManualClock, SystemClock};
pub use prefs::{DARK_MODE_KEY, FileStore, MemoryStore, PreferenceStore, ThemePreference};
pub use view::{FilterState, NameOrder, PriceOrder, RatingOrder, ViewController, derive_display_list};

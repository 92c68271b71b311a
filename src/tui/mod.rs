//! TUI module for the interactive product browser
//!
//! - `browse` - catalog list with search, sort controls and likes
//! - `components` - reusable widgets (header, select, list, footer)
//! - `theme` - light and dark palettes

pub mod browse;
pub mod components;
pub mod theme;

pub use browse::{ProductBrowser, ProductBrowserProps};
pub use theme::Theme;

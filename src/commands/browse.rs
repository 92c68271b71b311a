//! Product browser command (`storefront browse`)

use iocraft::prelude::*;

use crate::error::{Result, StorefrontError};
use crate::tui::ProductBrowser;

/// Launch the product browser TUI
pub async fn cmd_browse() -> Result<()> {
    element!(ProductBrowser)
        .fullscreen()
        .await
        .map_err(|e| StorefrontError::Other(format!("TUI error: {}", e)))
}

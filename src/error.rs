use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to {operation} {item_type} at {}: {source}", path.display())]
    StorageError {
        operation: &'static str,
        item_type: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("API error: {0}")]
    Api(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid name order '{0}'. Must be one of: all, a-z, z-a")]
    InvalidNameOrder(String),

    #[error("invalid price order '{0}'. Must be one of: default, low-high, high-low")]
    InvalidPriceOrder(String),

    #[error("invalid rating order '{0}'. Must be one of: default, 1-5, 5-1")]
    InvalidRatingOrder(String),

    #[error("invalid theme value '{0}'. Must be one of: enabled, disabled")]
    InvalidThemeValue(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

//! Error types for page mounting, configuration, storage, and the lightbox.
//!
//! None of these are fatal at runtime. `PageCore::mount` is the only place an
//! error stops anything; everything after mount logs and carries on.

use thiserror::Error;

/// Error returned by [`crate::page::PageCore::mount`].
#[derive(Debug, Error)]
pub enum PageError {
    /// A required element is not present in the page markup.
    #[error("required element #{id} is missing from the page")]
    MissingElement { id: String },
    /// The page configuration could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error returned by [`crate::config::PageConfig::from_json`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The raw config text is not valid JSON for [`crate::config::PageConfig`].
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid page config: {0}")]
    Invalid(String),
}

/// Rejected lightbox open request. The lightbox state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LightboxError {
    #[error("no images available for lightbox")]
    Empty,
    #[error("invalid image index {index} (gallery has {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// The browser refused a `localStorage` write (quota, private mode, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage write for key `{key}` failed: {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}

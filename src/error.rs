//! Error types for the widget layer.

use thiserror::Error;

/// Errors reported by panel and screen operations.
///
/// All failures are fatal to the calling operation; there is no retry or
/// degraded-mode behavior anywhere in this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// An anchor position name was not recognized.
    #[error("invalid anchor position: {0:?}")]
    InvalidAnchor(String),

    /// A horizontal text alignment name was not recognized.
    #[error("invalid text alignment: {0:?}")]
    InvalidAlignment(String),

    /// A drawing operation ran before a screen was attached.
    #[error("no screen attached for drawing; call attach_screen first")]
    ScreenNotAttached,
}

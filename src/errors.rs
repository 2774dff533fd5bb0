//! Centralized error handling for gamecolor.
//!
//! Color resolution itself never fails; these errors come from parsing user
//! input and writing output.

use thiserror::Error;

/// Unified error type for the gamecolor crate.
#[derive(Error, Debug)]
pub enum GameColorError {
    /// Color scheme parsing errors
    #[error("Color scheme error: {0}")]
    Scheme(#[from] SchemeError),

    /// Game lookup errors
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Color scheme specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("Unknown color scheme '{0}', expected 'light' or 'dark'")]
    Unknown(String),
}

/// Game registry specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown game '{0}'")]
    Unknown(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, GameColorError>;

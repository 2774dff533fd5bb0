//! gamecolor - Scheme-aware accent colors for game titles.
//!
//! Maps a fixed set of game titles to a light or dark hex color, falling back
//! to a default color for anything unknown.

pub mod colors;
pub mod config;
pub mod errors;
pub mod games;
pub mod scheme;

#[cfg(feature = "cli")]
pub mod cli;

pub use colors::{resolve_color, ColorResolver, HexColor, DEFAULT_COLOR};
pub use scheme::{ColorScheme, ColorSchemeSource};

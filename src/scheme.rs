//! Light/dark color-scheme preference and the sources that report it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::SchemeError;

/// Environment variable consulted by [`EnvSchemeSource::default`].
pub const SCHEME_ENV_VAR: &str = "GAMECOLOR_SCHEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(SchemeError::Unknown(s.to_string())),
        }
    }
}

/// Reports the current color-scheme preference of the host environment.
///
/// Implementations are queried on every resolution and must not assume the
/// answer stays the same between calls.
pub trait ColorSchemeSource: Send + Sync {
    fn color_scheme(&self) -> ColorScheme;
}

/// A fixed preference.
impl ColorSchemeSource for ColorScheme {
    fn color_scheme(&self) -> ColorScheme {
        *self
    }
}

/// A source backed by a closure, see [`from_fn`].
#[derive(Clone)]
pub struct FnSchemeSource<F>(F);

impl<F> fmt::Debug for FnSchemeSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSchemeSource").finish_non_exhaustive()
    }
}

/// Wraps a closure so it can be injected wherever a source is expected.
pub fn from_fn<F>(f: F) -> FnSchemeSource<F>
where
    F: Fn() -> ColorScheme + Send + Sync,
{
    FnSchemeSource(f)
}

impl<F> ColorSchemeSource for FnSchemeSource<F>
where
    F: Fn() -> ColorScheme + Send + Sync,
{
    fn color_scheme(&self) -> ColorScheme {
        (self.0)()
    }
}

impl<S: ColorSchemeSource + ?Sized> ColorSchemeSource for &S {
    fn color_scheme(&self) -> ColorScheme {
        (**self).color_scheme()
    }
}

impl<S: ColorSchemeSource + ?Sized> ColorSchemeSource for Arc<S> {
    fn color_scheme(&self) -> ColorScheme {
        (**self).color_scheme()
    }
}

/// Reads the preference from an environment variable on every call.
///
/// Unset or unparsable values are treated as [`ColorScheme::Light`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSchemeSource {
    var: String,
}

impl EnvSchemeSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSchemeSource {
    fn default() -> Self {
        Self::new(SCHEME_ENV_VAR)
    }
}

impl ColorSchemeSource for EnvSchemeSource {
    fn color_scheme(&self) -> ColorScheme {
        match std::env::var(&self.var) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(var = %self.var, error = %e, "Ignoring invalid color scheme");
                ColorScheme::default()
            }),
            Err(_) => ColorScheme::default(),
        }
    }
}

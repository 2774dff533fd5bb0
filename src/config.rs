//! Configuration management for gamecolor.
//!
//! Defaults are overridden by the environment, which is in turn overridden by
//! command-line arguments.

use crate::scheme::{ColorScheme, ColorSchemeSource, EnvSchemeSource, SCHEME_ENV_VAR};

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Color scheme configuration
    pub scheme: SchemeConfig,
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    /// Environment variable holding the preference
    pub env_var: String,
    /// Preference pinned by the command line, if any
    pub pinned: Option<ColorScheme>,
}

/// CLI configuration overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Color scheme override
    pub scheme: Option<ColorScheme>,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            env_var: SCHEME_ENV_VAR.to_string(),
            pinned: None,
        }
    }
}

impl Config {
    /// Load configuration with CLI overrides
    pub fn load(cli_overrides: Option<CliOverrides>) -> Self {
        let mut config = Self::default();

        if let Some(overrides) = cli_overrides {
            config.scheme.pinned = overrides.scheme;
        }

        config
    }
}

/// Resolves to the pinned value if the command line set one, otherwise to
/// whatever the environment says at call time.
impl ColorSchemeSource for Config {
    fn color_scheme(&self) -> ColorScheme {
        match self.scheme.pinned {
            Some(scheme) => scheme,
            None => EnvSchemeSource::new(self.scheme.env_var.as_str()).color_scheme(),
        }
    }
}

impl CliOverrides {
    /// Create CLI overrides from CLI arguments
    pub fn from_cli_args(scheme: Option<ColorScheme>) -> Self {
        Self { scheme }
    }
}

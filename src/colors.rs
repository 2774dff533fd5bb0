//! Scheme-aware accent colors for known game titles.
//!
//! The mapping is a compile-time table keyed by the display label. Anything
//! that is not in the table, including an empty or absent label, resolves to
//! [`DEFAULT_COLOR`].

use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::scheme::{ColorScheme, ColorSchemeSource};

/// A `#RRGGBB` color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(&'static str);

impl HexColor {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Checks for `#RGB` or `#RRGGBB` with hex digits only.
    pub fn is_well_formed(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(digits) => {
                matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Returned for empty, absent, or unknown labels.
pub const DEFAULT_COLOR: HexColor = HexColor::new("#1890ff");

/// The light and dark variants configured for one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub light: HexColor,
    pub dark: HexColor,
}

impl ColorPair {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self {
            light: HexColor::new(light),
            dark: HexColor::new(dark),
        }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> HexColor {
        match scheme {
            ColorScheme::Dark => self.dark,
            ColorScheme::Light => self.light,
        }
    }
}

static COLORS: phf::Map<&'static str, ColorPair> = phf::phf_map! {
    "原神" => ColorPair::new("#aaaaaa", "#808080"),
    "崩坏：星穹铁道" => ColorPair::new("#bfbfbf", "#555555"),
    "绝区零" => ColorPair::new("#cccccc", "#404040"),
};

/// Looks up the configured pair for `label` without consulting any scheme.
pub fn get_pair(label: &str) -> Option<ColorPair> {
    COLORS.get(label).copied()
}

/// Labels present in the table, in no particular order.
pub fn known_labels() -> impl Iterator<Item = &'static str> {
    COLORS.keys().copied()
}

pub fn count_labels() -> usize {
    COLORS.len()
}

/// Resolves the color for `label` using the scheme reported by `source`.
///
/// The source is only queried when the label is non-empty.
pub fn resolve_color<S>(label: Option<&str>, source: &S) -> HexColor
where
    S: ColorSchemeSource + ?Sized,
{
    let label = match label {
        Some(label) if !label.is_empty() => label,
        _ => {
            trace!("Empty label, using default color");
            return DEFAULT_COLOR;
        }
    };

    let scheme = source.color_scheme();
    match COLORS.get(label) {
        Some(pair) => {
            let color = pair.for_scheme(scheme);
            trace!(label, %scheme, %color, "Resolved label color");
            color
        }
        None => {
            trace!(label, %scheme, "Unknown label, using default color");
            DEFAULT_COLOR
        }
    }
}

/// Resolves label colors against an injected color-scheme source.
#[derive(Debug, Clone)]
pub struct ColorResolver<S> {
    source: S,
}

impl<S: ColorSchemeSource> ColorResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn resolve(&self, label: Option<&str>) -> HexColor {
        resolve_color(label, &self.source)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

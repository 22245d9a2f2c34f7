//! the theme catalog
//!
//! every theme the dashboard knows about lives in the [`registry::ThemeRegistry`].
//! anything that isn't registered there is treated as "no such theme", whether it
//! came from a user, local storage or the server.
pub mod metadata;
pub mod palette;
pub mod presets;
pub mod registry;

use {
    crate::theme::palette::ThemeColors,
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
};

/// a theme
pub trait Theme {
    /// the colors of the theme
    fn colors() -> ThemeColors;
    /// the name of the theme
    fn name() -> &'static str;
    /// a short description shown in the theme picker
    fn description() -> &'static str;
    /// the theme variant (light/dark)
    fn variant() -> ThemeVariant;
    /// whether the theme needs a premium entitlement
    fn premium() -> bool;
    /// convert the theme to CSS
    fn to_css_vars() -> String {
        Self::colors().to_css_vars()
    }
}

/// a theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// light variant
    Light,
    /// dark variant
    Dark,
}

impl ThemeVariant {
    /// whether this variant implies dark-mode styling
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// the variant the os preference maps to
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// the indicator class for this variant
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

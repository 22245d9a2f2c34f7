//! the theme state owned by a controller
use {
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
};

/// why the current theme holds its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSource {
    /// the user picked it
    ExplicitUser,
    /// it follows the os light/dark setting
    SystemPreference,
    /// nothing has been resolved yet
    Default,
}

impl ThemeSource {
    /// whether os preference changes may replace the theme
    pub fn follows_system(self) -> bool {
        !matches!(self, Self::ExplicitUser)
    }
}

impl std::fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ExplicitUser => "explicit",
            Self::SystemPreference => "system",
            Self::Default => "default",
        })
    }
}

/// the active theme
///
/// only the controller can change this; everyone else gets a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// the active theme id
    current: String,
    /// whether the active theme is dark, always derived from `current`
    is_dark: bool,
    /// why `current` holds its value
    source: ThemeSource,
    /// whether the theme picker is open
    menu_open: bool,
}

impl ThemeState {
    /// the state before anything has been resolved
    pub(crate) fn initial(theme: &str, is_dark: bool) -> Self {
        Self {
            current: theme.to_string(),
            is_dark,
            source: ThemeSource::Default,
            menu_open: false,
        }
    }

    /// replace the theme in one step
    pub(crate) fn assign(&mut self, theme: &str, is_dark: bool, source: ThemeSource) {
        self.current = theme.to_string();
        self.is_dark = is_dark;
        self.source = source;
    }

    /// open or close the theme picker
    pub(crate) fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    /// the active theme id
    pub fn current(&self) -> &str {
        &self.current
    }

    /// whether the active theme is dark
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// why the active theme is active
    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// whether the theme picker is open
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

//! picking the theme a session starts with
use crate::{
    controller::state::ThemeSource,
    theme::{ThemeVariant, registry::ThemeRegistry},
};

/// the outcome of resolving a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// the theme to apply
    pub theme: &'static str,
    /// why it was picked
    pub source: ThemeSource,
}

impl Resolution {
    /// the theme implied by the os preference
    pub fn from_system(prefers_dark: bool) -> Self {
        Self {
            theme: ThemeVariant::from_prefers_dark(prefers_dark).class(),
            source: ThemeSource::SystemPreference,
        }
    }
}

/// decide the initial theme from the stored value and the os preference
///
/// a stored id the registry doesn't know (a theme that got renamed or removed,
/// or plain garbage) counts as no stored value at all.
pub fn resolve_initial_theme(
    registry: &ThemeRegistry,
    stored: Option<&str>,
    system_prefers_dark: bool,
) -> Resolution {
    match stored.and_then(|id| registry.get_metadata(id)) {
        Some(meta) => Resolution {
            theme: meta.id,
            source: ThemeSource::ExplicitUser,
        },
        None => Resolution::from_system(system_prefers_dark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_wins() {
        let registry = ThemeRegistry::new();
        let res = resolve_initial_theme(&registry, Some("space"), false);

        assert_eq!(res.theme, "space");
        assert_eq!(res.source, ThemeSource::ExplicitUser);
    }

    #[test]
    fn unknown_stored_theme_falls_through() {
        let registry = ThemeRegistry::new();
        let res = resolve_initial_theme(&registry, Some("retro"), true);

        assert_eq!(res, Resolution::from_system(true));
        assert_eq!(res.theme, "dark");
        assert_eq!(res.source, ThemeSource::SystemPreference);
    }

    #[test]
    fn nothing_stored_follows_system() {
        let registry = ThemeRegistry::new();

        assert_eq!(resolve_initial_theme(&registry, None, false).theme, "light");
        assert_eq!(resolve_initial_theme(&registry, None, true).theme, "dark");
    }

    #[test]
    fn stored_ids_are_case_sensitive() {
        let registry = ThemeRegistry::new();
        let res = resolve_initial_theme(&registry, Some("Dark"), false);

        assert_eq!(res.theme, "light");
    }
}

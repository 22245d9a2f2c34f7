//! theme metadata stuff
use crate::theme::{Theme, ThemeVariant, palette::ThemeColors};

/// the metadata of a theme
#[derive(Clone)]
pub struct ThemeMetadata {
    /// the id of the theme
    pub id: &'static str,
    /// the theme name
    pub name: &'static str,
    /// one line about the theme
    pub description: &'static str,
    /// the theme variant (dark/light)
    pub variant: ThemeVariant,
    /// whether the theme needs a premium entitlement
    pub premium: bool,
    /// the function returning the themes colors
    pub colors_fn: fn() -> ThemeColors,
}

impl ThemeMetadata {
    /// make new metadata
    pub fn new<T: Theme>(id: &'static str) -> Self {
        Self {
            id,
            name: T::name(),
            description: T::description(),
            variant: T::variant(),
            premium: T::premium(),
            colors_fn: T::colors,
        }
    }

    /// get the colors
    pub fn get_colors(&self) -> ThemeColors {
        (self.colors_fn)()
    }

    /// whether the theme implies dark styling
    pub fn is_dark(&self) -> bool {
        self.variant.is_dark()
    }

    /// the premium marker class, if the theme has one
    pub fn marker_class(&self) -> Option<String> {
        self.premium.then(|| format!("theme-{}", self.id))
    }
}

impl std::fmt::Debug for ThemeMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeMetadata")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("variant", &self.variant)
            .field("premium", &self.premium)
            .finish()
    }
}

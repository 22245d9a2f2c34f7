//! theme registry stuff
use {
    crate::theme::{
        Theme, ThemeVariant, metadata::ThemeMetadata, palette::ThemeColors, presets::*,
    },
    hashbrown::HashMap,
};

/// the theme registry
///
/// lookups never fail loudly: an id that isn't registered is simply not valid,
/// not premium and not dark.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    /// the installed themes, in display order
    themes: Vec<ThemeMetadata>,
    /// id -> position in `themes`
    index: HashMap<&'static str, usize>,
}

impl ThemeRegistry {
    /// make a new registry with the built-in themes
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register::<Light>("light");
        registry.register::<Dark>("dark");
        registry.register::<Space>("space");
        registry.register::<Neon>("neon");
        registry.register::<Contrast>("contrast");

        registry
    }

    /// make a registry with no themes in it
    pub fn empty() -> Self {
        Self {
            themes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// register a theme, replacing any theme with the same id
    pub fn register<T: Theme>(&mut self, id: &'static str) {
        let meta = ThemeMetadata::new::<T>(id);

        match self.index.get(id) {
            Some(&pos) => self.themes[pos] = meta,
            None => {
                self.index.insert(id, self.themes.len());
                self.themes.push(meta);
            }
        }
    }

    /// every registered theme, in display order
    pub fn list_themes(&self) -> &[ThemeMetadata] {
        &self.themes
    }

    /// every registered theme id, in display order
    pub fn ids(&self) -> Vec<&'static str> {
        self.themes.iter().map(|meta| meta.id).collect()
    }

    /// whether `id` names a registered theme
    pub fn is_valid(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// whether `id` names a premium theme
    pub fn is_premium(&self, id: &str) -> bool {
        self.get_metadata(id).is_some_and(|meta| meta.premium)
    }

    /// whether `id` names a dark theme
    pub fn is_dark_theme(&self, id: &str) -> bool {
        self.get_metadata(id).is_some_and(ThemeMetadata::is_dark)
    }

    /// get the metadata of a theme
    pub fn get_metadata(&self, id: &str) -> Option<&ThemeMetadata> {
        self.index.get(id).map(|&pos| &self.themes[pos])
    }

    /// get a theme's colors by its id
    pub fn get_theme(&self, id: &str) -> Option<ThemeColors> {
        self.get_metadata(id).map(ThemeMetadata::get_colors)
    }

    /// get the CSS vars of a theme
    pub fn css_vars(&self, id: &str) -> Option<String> {
        self.get_theme(id).map(|colors| colors.to_css_vars())
    }

    /// list themes by variant
    pub fn list_by_variant(&self, variant: ThemeVariant) -> Vec<&'static str> {
        self.themes
            .iter()
            .filter(|meta| meta.variant == variant)
            .map(|meta| meta.id)
            .collect()
    }

    /// every marker class any registered theme can put on the root element
    pub fn marker_classes(&self) -> Vec<String> {
        self.themes
            .iter()
            .filter_map(ThemeMetadata::marker_class)
            .collect()
    }

    /// render a stylesheet with one block per theme, keyed on `data-theme`
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();

        for meta in &self.themes {
            css.push_str(&format!("[data-theme=\"{}\"] {{\n", meta.id));

            for line in meta.get_colors().to_css_vars().lines() {
                css.push_str("  ");
                css.push_str(line);
                css.push('\n');
            }

            css.push_str("}\n");
        }

        css
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_in_display_order() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.ids(),
            vec!["light", "dark", "space", "neon", "contrast"]
        );
    }

    #[test]
    fn unknown_ids_are_just_invalid() {
        let registry = ThemeRegistry::new();

        assert!(!registry.is_valid("retro"));
        assert!(!registry.is_premium("retro"));
        assert!(!registry.is_dark_theme("retro"));
        assert!(registry.get_theme("retro").is_none());
        assert!(registry.css_vars("").is_none());
    }

    #[test]
    fn premium_and_dark_flags() {
        let registry = ThemeRegistry::new();

        assert!(!registry.is_premium("light"));
        assert!(!registry.is_premium("dark"));
        assert!(registry.is_premium("space"));
        assert!(registry.is_premium("neon"));
        assert!(registry.is_premium("contrast"));

        assert!(!registry.is_dark_theme("light"));
        assert!(registry.is_dark_theme("dark"));
        assert!(registry.is_dark_theme("neon"));
    }

    #[test]
    fn light_variant_listing() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.list_by_variant(ThemeVariant::Light), vec!["light"]);
    }

    #[test]
    fn marker_classes_only_for_premium() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.marker_classes(),
            vec!["theme-space", "theme-neon", "theme-contrast"]
        );
    }

    #[test]
    fn re_registering_keeps_position() {
        let mut registry = ThemeRegistry::new();
        registry.register::<Contrast>("dark");

        assert_eq!(registry.ids()[1], "dark");
        assert_eq!(registry.list_themes().len(), 5);
        assert!(registry.is_premium("dark"));
    }

    #[test]
    fn stylesheet_has_a_block_per_theme() {
        let css = ThemeRegistry::new().stylesheet();

        assert_eq!(css.matches("[data-theme=").count(), 5);
        assert!(css.contains("[data-theme=\"neon\"] {\n  --base: #09090b;"));
        assert!(css.contains("  --glow: #00f0ff;\n"));
    }
}

//! premium theme gating
use crate::theme::registry::ThemeRegistry;

/// whether a session may switch to `theme_id`
///
/// entitlement is passed in per request and never remembered.
pub fn authorize(registry: &ThemeRegistry, theme_id: &str, is_entitled: bool) -> bool {
    !registry.is_premium(theme_id) || is_entitled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_themes_need_nothing() {
        let registry = ThemeRegistry::new();

        assert!(authorize(&registry, "light", false));
        assert!(authorize(&registry, "dark", false));
    }

    #[test]
    fn premium_themes_need_entitlement() {
        let registry = ThemeRegistry::new();

        for id in ["space", "neon", "contrast"] {
            assert!(!authorize(&registry, id, false), "{id} should be gated");
            assert!(authorize(&registry, id, true));
        }
    }
}

//! putting a theme onto the surface
use {
    crate::{
        controller::state::{ThemeSource, ThemeState},
        surface::{Surface, THEME_ATTRIBUTE},
        theme::{ThemeVariant, registry::ThemeRegistry},
    },
    tracing::{debug, warn},
};

/// apply `theme_id` to `surface` and record it in `state`
///
/// every marker any registered theme can leave behind is cleared first, so
/// applying the same theme twice is the same as applying it once. returns
/// false without touching anything when the surface isn't mounted yet or the
/// theme isn't registered.
pub fn apply<S: Surface + ?Sized>(
    registry: &ThemeRegistry,
    surface: &mut S,
    state: &mut ThemeState,
    theme_id: &str,
    source: ThemeSource,
) -> bool {
    if !surface.is_ready() {
        debug!(theme = theme_id, "surface not ready, deferring theme");
        return false;
    }

    let Some(meta) = registry.get_metadata(theme_id) else {
        warn!(theme = theme_id, "refusing to apply unregistered theme");
        return false;
    };

    clear_markers(registry, surface);

    let variant = meta.variant;
    surface.add_class(variant.class());

    if let Some(marker) = meta.marker_class() {
        surface.add_class(&marker);
    }

    surface.set_attribute(THEME_ATTRIBUTE, meta.id);
    state.assign(meta.id, registry.is_dark_theme(meta.id), source);

    debug!(theme = meta.id, %source, dark = variant.is_dark(), "theme applied");
    true
}

/// remove every theme marker from the surface
fn clear_markers<S: Surface + ?Sized>(registry: &ThemeRegistry, surface: &mut S) {
    surface.remove_class(ThemeVariant::Light.class());
    surface.remove_class(ThemeVariant::Dark.class());

    for marker in registry.marker_classes() {
        surface.remove_class(&marker);
    }
}

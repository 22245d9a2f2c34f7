//! decorative background layers tied to one theme
use {
    crate::{
        controller::notifier::{ThemeChange, ThemeSubscriber},
        error::Result,
    },
    tracing::debug,
};

/// something that can animate a layer in and out
pub trait Animator {
    /// show a layer
    fn fade_in(&mut self, layer: &str) -> Result<()>;
    /// hide a layer
    fn fade_out(&mut self, layer: &str) -> Result<()>;
}

/// a background layer that's only on while its theme is active
///
/// without an [`Animator`] the layer just snaps on and off.
pub struct BackgroundEffect {
    /// the theme that turns the layer on
    theme: String,
    /// the layer's name
    layer: String,
    /// optional animation support
    animator: Option<Box<dyn Animator>>,
    /// whether the layer is showing
    enabled: bool,
}

impl BackgroundEffect {
    /// make a layer bound to `theme`
    pub fn new(
        theme: impl Into<String>,
        layer: impl Into<String>,
        animator: Option<Box<dyn Animator>>,
    ) -> Self {
        Self {
            theme: theme.into(),
            layer: layer.into(),
            animator,
            enabled: false,
        }
    }

    /// the starfield shown behind the space theme
    pub fn starfield(animator: Option<Box<dyn Animator>>) -> Self {
        Self::new("space", "stars", animator)
    }

    /// whether the layer is showing
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// the layer's name
    pub fn layer(&self) -> &str {
        &self.layer
    }
}

impl std::fmt::Debug for BackgroundEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundEffect")
            .field("theme", &self.theme)
            .field("layer", &self.layer)
            .field("animated", &self.animator.is_some())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl ThemeSubscriber for BackgroundEffect {
    fn name(&self) -> &str {
        &self.layer
    }

    fn on_theme_change(&mut self, change: &ThemeChange) -> Result<()> {
        let wanted = change.theme == self.theme;

        if wanted == self.enabled {
            return Ok(());
        }

        self.enabled = wanted;
        debug!(layer = %self.layer, enabled = wanted, "toggling background layer");

        match self.animator.as_mut() {
            Some(animator) if wanted => animator.fade_in(&self.layer),
            Some(animator) => animator.fade_out(&self.layer),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{cell::RefCell, rc::Rc},
    };

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Animator for Recorder {
        fn fade_in(&mut self, layer: &str) -> Result<()> {
            self.0.borrow_mut().push(format!("in:{layer}"));
            Ok(())
        }

        fn fade_out(&mut self, layer: &str) -> Result<()> {
            self.0.borrow_mut().push(format!("out:{layer}"));
            Ok(())
        }
    }

    fn change(theme: &str) -> ThemeChange {
        ThemeChange {
            theme: theme.to_string(),
            is_dark: true,
        }
    }

    #[test]
    fn snaps_without_animator() {
        let mut stars = BackgroundEffect::starfield(None);

        stars.on_theme_change(&change("space")).unwrap();
        assert!(stars.is_enabled());

        stars.on_theme_change(&change("dark")).unwrap();
        assert!(!stars.is_enabled());
    }

    #[test]
    fn animates_only_on_transitions() {
        let recorder = Recorder::default();
        let mut stars = BackgroundEffect::starfield(Some(Box::new(recorder.clone())));

        stars.on_theme_change(&change("space")).unwrap();
        stars.on_theme_change(&change("space")).unwrap();
        stars.on_theme_change(&change("neon")).unwrap();

        assert_eq!(*recorder.0.borrow(), vec!["in:stars", "out:stars"]);
    }
}

//! tooltip styling
use crate::{
    controller::notifier::{ThemeChange, ThemeSubscriber},
    error::Result,
    theme::ThemeVariant,
};

/// keeps tooltips readable on the active theme
#[derive(Debug, Default)]
pub struct TooltipThemer {
    /// the variant tooltips are styled for
    variant: Option<ThemeVariant>,
}

impl TooltipThemer {
    /// make a new tooltip themer
    pub fn new() -> Self {
        Self::default()
    }

    /// the class tooltips should carry
    pub fn class(&self) -> Option<&'static str> {
        self.variant.map(|variant| match variant {
            ThemeVariant::Dark => "tooltip-dark",
            ThemeVariant::Light => "tooltip-light",
        })
    }
}

impl ThemeSubscriber for TooltipThemer {
    fn name(&self) -> &str {
        "tooltips"
    }

    fn on_theme_change(&mut self, change: &ThemeChange) -> Result<()> {
        self.variant = Some(ThemeVariant::from_prefers_dark(change.is_dark));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_dark_flag() {
        let mut tooltips = TooltipThemer::new();
        assert_eq!(tooltips.class(), None);

        tooltips
            .on_theme_change(&ThemeChange {
                theme: "contrast".to_string(),
                is_dark: true,
            })
            .unwrap();
        assert_eq!(tooltips.class(), Some("tooltip-dark"));

        tooltips
            .on_theme_change(&ThemeChange {
                theme: "light".to_string(),
                is_dark: false,
            })
            .unwrap();
        assert_eq!(tooltips.class(), Some("tooltip-light"));
    }
}

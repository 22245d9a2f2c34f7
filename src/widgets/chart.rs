//! chart colors
use {
    crate::{
        bail,
        controller::notifier::{ThemeChange, ThemeSubscriber},
        error::Result,
        theme::registry::ThemeRegistry,
    },
    std::sync::Arc,
};

/// the colors charts are drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// axis labels and legends
    pub text: String,
    /// grid lines
    pub grid: String,
    /// tooltip background
    pub tooltip_background: String,
    /// tooltip text
    pub tooltip_text: String,
    /// dataset colors, in series order
    pub series: Vec<String>,
}

/// keeps chart colors in line with the active theme
#[derive(Debug)]
pub struct ChartThemer {
    /// where palettes come from
    registry: Arc<ThemeRegistry>,
    /// the current style, once a theme has been seen
    style: Option<ChartStyle>,
    /// how many times the charts were re-themed
    updates: usize,
}

impl ChartThemer {
    /// make a new chart themer
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self {
            registry,
            style: None,
            updates: 0,
        }
    }

    /// the current chart style
    pub fn style(&self) -> Option<&ChartStyle> {
        self.style.as_ref()
    }

    /// how many times the charts were re-themed
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl ThemeSubscriber for ChartThemer {
    fn name(&self) -> &str {
        "charts"
    }

    fn on_theme_change(&mut self, change: &ThemeChange) -> Result<()> {
        let Some(colors) = self.registry.get_theme(&change.theme) else {
            bail!("no palette for theme {}", change.theme);
        };

        let accents = &colors.accents;
        let series = [
            &accents.primary,
            &accents.secondary,
            &accents.success,
            &accents.warning,
            &accents.danger,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

        self.style = Some(ChartStyle {
            text: colors.core.text.clone(),
            grid: colors.core.muted.clone(),
            tooltip_background: colors.core.overlay.clone(),
            tooltip_text: colors.core.text.clone(),
            series,
        });
        self.updates += 1;

        Ok(())
    }
}

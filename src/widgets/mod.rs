//! widgets that re-theme themselves on theme changes
pub mod chart;
pub mod effect;
pub mod tooltip;

pub use {
    chart::{ChartStyle, ChartThemer},
    effect::{Animator, BackgroundEffect},
    tooltip::TooltipThemer,
};

//! Leptos components of the chart surface.

pub mod area_chart;
pub mod legend;
pub mod tooltip;

pub use area_chart::AreaChart;
pub use legend::{Legend, ScrollButton};
pub use tooltip::{ChartTooltip, tooltip_value};

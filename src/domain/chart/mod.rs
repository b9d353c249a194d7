//! Area chart aggregate: configuration, colours, selection, axis and legend logic.

pub mod axis;
pub mod colors;
pub mod entities;
pub mod layout;
pub mod legend;
pub mod selection;
pub mod tooltip;
pub mod value_objects;

pub use axis::{AxisScale, DomainBound, YAxisDomain};
pub use colors::CategoryColors;
pub use entities::*;
pub use layout::{SeriesLayout, StackedPoint, layout_series};
pub use legend::{AutoRepeat, KeyRepeat, LegendOverflow, RepeatScheduler, ScrollDirection, ScrollMetrics};
pub use selection::{ActiveSelection, SelectionOutcome};
pub use tooltip::{TooltipTracker, tooltip_payload};
pub use value_objects::*;

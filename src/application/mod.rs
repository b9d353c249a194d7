//! Use cases composing the domain for the dashboard UI.

pub mod config;
pub mod dashboard_store;
pub mod price_summary;
pub mod use_cases;

pub use config::DashboardConfig;
pub use dashboard_store::DashboardStore;
pub use price_summary::{PriceSummary, format_usd};
pub use use_cases::*;

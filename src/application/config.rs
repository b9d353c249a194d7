use crate::domain::{chart::ChartColor, logging::LogLevel, market_data::RangeToken};

/// Startup configuration of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub default_range: RangeToken,
    pub palette: Vec<ChartColor>,
    pub currency: String,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_range: RangeToken::OneDay,
            palette: ChartColor::PALETTE.to_vec(),
            currency: "USD".to_string(),
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

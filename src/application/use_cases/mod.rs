pub mod chart_data;
pub mod render_chart;

pub use chart_data::ChartDataUseCase;
pub use render_chart::*;

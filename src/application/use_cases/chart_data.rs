use crate::domain::{
    logging::LogComponent,
    market_data::{ChartSeries, PriceRepository, SeriesAlignmentService},
    state::InteractionState,
};

/// Use Case: rows and categories the chart hero should plot for the current state.
pub struct ChartDataUseCase<'a> {
    repository: &'a dyn PriceRepository,
    alignment: SeriesAlignmentService,
}

impl<'a> ChartDataUseCase<'a> {
    pub fn new(repository: &'a dyn PriceRepository) -> Self {
        Self { repository, alignment: SeriesAlignmentService::new() }
    }

    /// Compare mode plots one category per active range; otherwise the first
    /// active range as `price`. An empty selection yields an empty series.
    pub fn execute(&self, state: &InteractionState) -> ChartSeries {
        let series = if state.compare() {
            self.alignment.compare(self.repository, state.active_ranges())
        } else {
            match state.primary_range() {
                Some(range) => self.alignment.single(&self.repository.series_or_empty(range)),
                None => ChartSeries::default(),
            }
        };

        crate::log_debug!(
            LogComponent::Application("ChartData"),
            "{} rows x {:?}",
            series.rows.len(),
            series.categories
        );
        series
    }
}

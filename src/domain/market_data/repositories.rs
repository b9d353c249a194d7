use crate::domain::market_data::{PriceSeries, RangeToken};

/// Read-only access to the pre-loaded price feed.
pub trait PriceRepository {
    /// Series of one range, `None` when the feed has no entry for it.
    fn series(&self, range: RangeToken) -> Option<&PriceSeries>;

    /// Ranges present in the feed, in time-bar order.
    fn ranges(&self) -> Vec<RangeToken>;

    /// Series of one range, empty when absent.
    fn series_or_empty(&self, range: RangeToken) -> PriceSeries {
        self.series(range).cloned().unwrap_or_default()
    }
}

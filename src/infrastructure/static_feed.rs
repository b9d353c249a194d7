//! Price feed compiled into the binary from `assets/price.json`.

use crate::domain::errors::{AppError, DataResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PricePoint, PriceRepository, PriceSeries, RangeToken};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::str::FromStr;

const EMBEDDED_FEED: &str = include_str!("../../assets/price.json");

static EMBEDDED: OnceCell<StaticPriceFeed> = OnceCell::new();

/// Read-only range → series mapping, parsed once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPriceFeed {
    series: BTreeMap<RangeToken, PriceSeries>,
}

impl StaticPriceFeed {
    /// Parse `{ "<range>": [{ "date": .., "price": .. }] }`.
    ///
    /// Unknown range keys are skipped with a warning; malformed JSON is a `DataError`.
    pub fn from_json(json: &str) -> DataResult<Self> {
        let raw: BTreeMap<String, Vec<PricePoint>> = serde_json::from_str(json)?;
        let mut series = BTreeMap::new();
        for (key, points) in raw {
            match RangeToken::from_str(&key) {
                Ok(range) => {
                    series.insert(range, PriceSeries::new(points));
                }
                Err(_) => {
                    crate::log_warn!(LogComponent::Infrastructure("StaticPriceFeed"), "skipping unknown range '{}'", key);
                }
            }
        }
        crate::log_debug!(LogComponent::Infrastructure("StaticPriceFeed"), "loaded {} ranges", series.len());
        Ok(Self { series })
    }

    /// The embedded asset, parsed on first access.
    pub fn embedded() -> DataResult<&'static StaticPriceFeed> {
        EMBEDDED.get_or_try_init(|| Self::from_json(EMBEDDED_FEED))
    }

    pub fn insert(&mut self, range: RangeToken, series: PriceSeries) {
        self.series.insert(range, series);
    }
}

impl PriceRepository for StaticPriceFeed {
    fn series(&self, range: RangeToken) -> Option<&PriceSeries> {
        self.series.get(&range)
    }

    fn ranges(&self) -> Vec<RangeToken> {
        self.series.keys().copied().collect()
    }
}

impl FromStr for StaticPriceFeed {
    type Err = AppError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Self::from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_feed_has_every_range() {
        let feed = StaticPriceFeed::embedded().expect("embedded feed parses");
        assert_eq!(feed.ranges().len(), 7);
        let day = feed.series_or_empty(RangeToken::OneDay);
        assert_eq!(day.latest().map(|p| p.price.value()), Some(63179.71));
    }

    #[test]
    fn malformed_feed_is_a_data_error() {
        let err = StaticPriceFeed::from_json("{\"1d\": [{\"date\": 1}]}").unwrap_err();
        assert!(matches!(err, AppError::DataError(_)));
    }

    #[test]
    fn unknown_ranges_are_skipped() {
        let feed = StaticPriceFeed::from_json(r#"{"2h": [], "1w": [{"date": "a", "price": 1}]}"#).expect("parses");
        assert_eq!(feed.ranges(), vec![RangeToken::OneWeek]);
    }
}

use crate::domain::market_data::{
    DATE_FIELD, DataRow, PRICE_FIELD, PriceRepository, PriceSeries, RangeToken, number_value,
};
use serde_json::Value;

/// Rows and category names handed to the chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub rows: Vec<DataRow>,
    pub categories: Vec<String>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.categories.is_empty()
    }
}

/// Domain service turning feed series into chart rows.
pub struct SeriesAlignmentService;

impl SeriesAlignmentService {
    pub fn new() -> Self {
        Self
    }

    /// Single range: one row per point, category `price`.
    pub fn single(&self, series: &PriceSeries) -> ChartSeries {
        ChartSeries { rows: series.to_rows(), categories: vec![PRICE_FIELD.to_string()] }
    }

    /// Several ranges side by side, one category per range token, aligned by position.
    ///
    /// Row `i` takes its date from the first range that has a point at `i`; a
    /// range shorter than the longest contributes nulls past its end.
    pub fn compare(&self, repository: &dyn PriceRepository, ranges: &[RangeToken]) -> ChartSeries {
        let series: Vec<(RangeToken, PriceSeries)> =
            ranges.iter().map(|range| (*range, repository.series_or_empty(*range))).collect();
        let length = series.iter().map(|(_, s)| s.len()).max().unwrap_or(0);

        let rows = (0..length)
            .map(|i| {
                let date = series
                    .iter()
                    .find_map(|(_, s)| s.get(i))
                    .map(|p| Value::String(p.date.value().to_string()))
                    .unwrap_or(Value::Null);
                let mut row = DataRow::new().with(DATE_FIELD, date);
                for (range, s) in &series {
                    let value = s.get(i).map(|p| number_value(p.price.value())).unwrap_or(Value::Null);
                    row.insert(range.label(), value);
                }
                row
            })
            .collect();

        ChartSeries { rows, categories: ranges.iter().map(|r| r.label().to_string()).collect() }
    }
}

impl Default for SeriesAlignmentService {
    fn default() -> Self {
        Self::new()
    }
}

/// Change between the first and latest point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    pub latest: f64,
    pub absolute: f64,
    pub percent: f64,
}

impl PriceChange {
    pub fn of(series: &PriceSeries) -> Option<Self> {
        let first = series.first()?.price.value();
        let latest = series.latest()?.price.value();
        let absolute = latest - first;
        let percent = if first == 0.0 { 0.0 } else { absolute / first * 100.0 };
        Some(Self { latest, absolute, percent })
    }

    pub fn is_gain(&self) -> bool {
        self.absolute >= 0.0
    }
}

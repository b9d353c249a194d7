pub use super::value_objects::{DateLabel, Price, RangeToken};
use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Domain entity - one sample of the price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: DateLabel,
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: impl Into<DateLabel>, price: f64) -> Self {
        Self { date: date.into(), price: Price::from(price) }
    }

    /// Row shape consumed by the chart: `{ "date": .., "price": .. }`.
    pub fn to_row(&self) -> DataRow {
        let mut fields = Map::new();
        fields.insert(DATE_FIELD.to_string(), Value::String(self.date.value().to_string()));
        fields.insert(PRICE_FIELD.to_string(), number_value(self.price.value()));
        DataRow::from(fields)
    }
}

pub const DATE_FIELD: &str = "date";
pub const PRICE_FIELD: &str = "price";

/// Domain entity - immutable, ordered price series of one range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    points: Arc<Vec<PricePoint>>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points: Arc::new(points) }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn to_rows(&self) -> Vec<DataRow> {
        self.points.iter().map(PricePoint::to_row).collect()
    }

}

/// One chart row: the index field plus one numeric (or null) field per category.
#[derive(Debug, Clone, PartialEq, Default, Deref, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow(Map<String, Value>);

impl DataRow {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.0.insert(field.to_string(), value);
        self
    }

    pub fn insert(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    /// Numeric value of a category; null, missing and non-numeric fields read as `None`.
    pub fn value(&self, category: &str) -> Option<f64> {
        self.0.get(category).and_then(Value::as_f64).filter(|v| v.is_finite())
    }

    /// Display label of the index field.
    pub fn label(&self, index: &str) -> String {
        match self.0.get(index) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// JSON number for a finite float, null otherwise. Integral values stay integers.
pub fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return Value::from(value as i64);
    }
    serde_json::Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

/// Whether `category` carries exactly one non-null value across `rows`.
pub fn has_only_one_value_for_key(rows: &[DataRow], category: &str) -> bool {
    rows.iter().filter(|row| row.value(category).is_some()).take(2).count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_reads_numbers_and_labels() {
        let row: DataRow = serde_json::from_value(json!({"date": "2024-01-02", "price": 110, "eth": null}))
            .expect("row");
        assert_eq!(row.value("price"), Some(110.0));
        assert_eq!(row.value("eth"), None);
        assert_eq!(row.value("missing"), None);
        assert_eq!(row.label("date"), "2024-01-02");
    }

    #[test]
    fn single_value_detection_ignores_nulls() {
        let rows: Vec<DataRow> = serde_json::from_value(json!([
            {"date": "a", "x": 1, "y": null},
            {"date": "b", "x": 2, "y": 5},
        ]))
        .expect("rows");
        assert!(!has_only_one_value_for_key(&rows, "x"));
        assert!(has_only_one_value_for_key(&rows, "y"));
        assert!(!has_only_one_value_for_key(&rows, "z"));
    }

    #[test]
    fn integral_prices_stay_integers() {
        assert_eq!(PricePoint::new("2024-01-02", 110.0).to_row().fields()["price"], json!(110));
        assert_eq!(number_value(63179.71), json!(63179.71));
        assert_eq!(number_value(-4.0), json!(-4));
        assert_eq!(number_value(f64::NAN), Value::Null);
        assert_eq!(number_value(f64::INFINITY), Value::Null);
    }
}

use crate::domain::market_data::{PriceChange, PriceSeries};
use num_format::{Locale, ToFormattedString};

/// Placeholder shown when the series is empty.
pub const EMPTY_READOUT: &str = "--";

/// Header readout of the first active range.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub price: String,
    pub change: String,
    pub currency: String,
    pub is_gain: bool,
}

impl PriceSummary {
    pub fn from_series(series: &PriceSeries, currency: &str) -> Self {
        match PriceChange::of(series) {
            Some(change) => Self {
                price: format_usd(change.latest),
                change: format_change(&change),
                currency: currency.to_string(),
                is_gain: change.is_gain(),
            },
            None => Self::placeholder(currency),
        }
    }

    pub fn placeholder(currency: &str) -> Self {
        Self {
            price: EMPTY_READOUT.to_string(),
            change: EMPTY_READOUT.to_string(),
            currency: currency.to_string(),
            is_gain: true,
        }
    }
}

/// `63179.71` → `"63,179.71"`.
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, (cents / 100).to_formatted_string(&Locale::en), cents % 100)
}

/// `"+ 2,161.42 (3.54%)"` / `"- 12.00 (0.50%)"`.
fn format_change(change: &PriceChange) -> String {
    let sign = if change.is_gain() { "+" } else { "-" };
    format!("{} {} ({:.2}%)", sign, format_usd(change.absolute.abs()), change.percent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::PricePoint;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_usd(63179.71), "63,179.71");
        assert_eq!(format_usd(999.0), "999.00");
        assert_eq!(format_usd(1_000.0), "1,000.00");
        assert_eq!(format_usd(-1_234_567.891), "-1,234,567.89");
        assert_eq!(format_usd(-0.001), "0.00");
        assert_eq!(format_usd(999.999), "1,000.00");
        assert_eq!(format_usd(12_345_678.5), "12,345,678.50");
    }

    #[test]
    fn loss_readout() {
        let series = PriceSeries::new(vec![PricePoint::new("a", 2400.0), PricePoint::new("b", 2388.0)]);
        let summary = PriceSummary::from_series(&series, "USD");
        assert_eq!(summary.price, "2,388.00");
        assert_eq!(summary.change, "- 12.00 (0.50%)");
        assert!(!summary.is_gain);
    }

    #[test]
    fn empty_series_shows_placeholders() {
        let summary = PriceSummary::from_series(&PriceSeries::default(), "USD");
        assert_eq!(summary, PriceSummary::placeholder("USD"));
        assert_eq!(summary.price, "--");
    }
}

use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - USD price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - time window selectable in the time bar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum RangeToken {
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,

    #[strum(serialize = "3d")]
    #[serde(rename = "3d")]
    ThreeDays,

    #[strum(serialize = "1w")]
    #[serde(rename = "1w")]
    OneWeek,

    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMonth,

    #[strum(serialize = "6m")]
    #[serde(rename = "6m")]
    SixMonths,

    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    OneYear,

    #[strum(serialize = "max")]
    #[serde(rename = "max")]
    Max,
}

impl RangeToken {
    /// Token text as shown in the time bar and used as a category name.
    pub fn label(&self) -> &str {
        self.as_ref()
    }
}

impl Default for RangeToken {
    fn default() -> Self {
        Self::OneDay
    }
}

/// Value Object - ISO-like date label of a price point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateLabel(String);

impl DateLabel {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DateLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn range_tokens_round_trip_through_text() {
        let labels: Vec<String> = RangeToken::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["1d", "3d", "1w", "1m", "6m", "1y", "max"]);
        assert_eq!(RangeToken::from_str("6m").ok(), Some(RangeToken::SixMonths));
        assert!(RangeToken::from_str("2h").is_err());
    }

    #[test]
    fn price_compares_by_value() {
        assert!(Price::new(1.0) < Price::new(2.0));
        assert_eq!(*Price::from(3.5), 3.5);
    }
}

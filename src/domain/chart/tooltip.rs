use super::colors::CategoryColors;
use crate::domain::events::{TooltipEvent, TooltipPayloadItem};
use crate::domain::market_data::DataRow;

/// Tooltip rows for the hovered row: one per category that has a value there.
pub fn tooltip_payload(row: &DataRow, index: &str, categories: &[String], colors: &CategoryColors) -> Vec<TooltipPayloadItem> {
    categories
        .iter()
        .filter_map(|category| {
            row.value(category).map(|value| TooltipPayloadItem {
                category: category.clone(),
                value,
                index: row.label(index),
                color: colors.color_for(category),
                payload: row.clone(),
            })
        })
        .collect()
}

/// Edge-triggered gate for `tooltip_callback`.
///
/// Hover handlers fire on every pointer move; the callback only sees a call
/// when `active` or `label` differs from the previous one that got through.
#[derive(Debug, Default)]
pub struct TooltipTracker {
    last: Option<(bool, Option<String>)>,
}

impl TooltipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the event to deliver, or `None` when nothing changed.
    pub fn observe(&mut self, active: bool, label: Option<String>, payload: Vec<TooltipPayloadItem>) -> Option<TooltipEvent> {
        let key = (active, label);
        if self.last.as_ref() == Some(&key) {
            return None;
        }
        self.last = Some(key.clone());
        Some(TooltipEvent { active: key.0, payload, label: key.1 })
    }

    /// Forget the previous state, e.g. after remount.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartColor;
    use serde_json::json;

    #[test]
    fn payload_skips_null_series() {
        let row: DataRow = serde_json::from_value(json!({"date": "d", "a": 1.5, "b": null})).expect("row");
        let cats = vec!["a".to_string(), "b".to_string()];
        let colors = CategoryColors::construct(&cats, &ChartColor::PALETTE);
        let payload = tooltip_payload(&row, "date", &cats, &colors);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].category, "a");
        assert_eq!(payload[0].index, "d");
        assert_eq!(payload[0].color, ChartColor::Blue);
    }

    #[test]
    fn repeated_hover_is_suppressed() {
        let mut tracker = TooltipTracker::new();
        assert!(tracker.observe(true, Some("d1".into()), Vec::new()).is_some());
        assert!(tracker.observe(true, Some("d1".into()), Vec::new()).is_none());
        assert!(tracker.observe(true, Some("d2".into()), Vec::new()).is_some());
        assert!(tracker.observe(false, Some("d2".into()), Vec::new()).is_some());
        assert!(tracker.observe(false, Some("d2".into()), Vec::new()).is_none());
    }
}

//! Chart-local selection state machine.
//!
//! A dot selection carries its category, so the active legend can never
//! disagree with the active dot.

use crate::domain::events::ValueChangeEvent;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{DataRow, has_only_one_value_for_key};

/// Which dot or legend category is highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveSelection {
    #[default]
    None,
    Category(String),
    Dot { index: usize, category: String },
}

/// What a click did and what `on_value_change` should receive.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// New selection; report the event.
    Selected(ValueChangeEvent),
    /// Selection dropped; report `None`.
    Cleared,
    /// Nothing to report.
    Unchanged,
}

impl SelectionOutcome {
    /// Forward to an `on_value_change` style handler, skipping `Unchanged`.
    pub fn notify(self, handler: impl FnOnce(Option<ValueChangeEvent>)) {
        match self {
            SelectionOutcome::Selected(event) => handler(Some(event)),
            SelectionOutcome::Cleared => handler(None),
            SelectionOutcome::Unchanged => {}
        }
    }
}

impl ActiveSelection {
    /// Category highlighted in the legend, for both category and dot selections.
    pub fn active_legend(&self) -> Option<&str> {
        match self {
            ActiveSelection::None => None,
            ActiveSelection::Category(category) | ActiveSelection::Dot { category, .. } => Some(category),
        }
    }

    pub fn active_dot(&self) -> Option<(usize, &str)> {
        match self {
            ActiveSelection::Dot { index, category } => Some((*index, category)),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, ActiveSelection::None)
    }

    pub fn is_active_dot(&self, index: usize, category: &str) -> bool {
        self.active_dot() == Some((index, category))
    }

    /// Whether `category` is drawn de-emphasized under this selection.
    pub fn dims(&self, category: &str) -> bool {
        match self {
            ActiveSelection::None => false,
            ActiveSelection::Dot { .. } => true,
            ActiveSelection::Category(active) => active != category,
        }
    }

    /// Click on the plotted point `index` of `category`.
    pub fn click_dot(&mut self, rows: &[DataRow], index: usize, category: &str) -> SelectionOutcome {
        let same_dot = self.is_active_dot(index, category);
        let sole_value_legend =
            self.active_legend() == Some(category) && has_only_one_value_for_key(rows, category);

        if same_dot || sole_value_legend {
            return self.clear();
        }

        let Some(row) = rows.get(index) else {
            crate::log_warn!(
                LogComponent::Domain("Selection"),
                "dot click outside data: index {} of {}",
                index,
                rows.len()
            );
            return SelectionOutcome::Unchanged;
        };

        *self = ActiveSelection::Dot { index, category: category.to_string() };
        crate::log_debug!(LogComponent::Domain("Selection"), "dot {}@{}", category, index);
        SelectionOutcome::Selected(ValueChangeEvent::Dot {
            category_clicked: category.to_string(),
            row: row.clone(),
        })
    }

    /// Click on the legend item (or hit line) of `category`.
    pub fn click_category(&mut self, rows: &[DataRow], category: &str) -> SelectionOutcome {
        let same_category = matches!(self, ActiveSelection::Category(active) if active == category);
        let sole_value_dot = matches!(self, ActiveSelection::Dot { category: active, .. } if active == category)
            && has_only_one_value_for_key(rows, category);

        if same_category || sole_value_dot {
            return self.clear();
        }

        *self = ActiveSelection::Category(category.to_string());
        crate::log_debug!(LogComponent::Domain("Selection"), "category {}", category);
        SelectionOutcome::Selected(ValueChangeEvent::Category { category_clicked: category.to_string() })
    }

    /// Click on empty chart background.
    pub fn click_background(&mut self) -> SelectionOutcome {
        if self.is_active() { self.clear() } else { SelectionOutcome::Unchanged }
    }

    fn clear(&mut self) -> SelectionOutcome {
        *self = ActiveSelection::None;
        crate::log_debug!(LogComponent::Domain("Selection"), "cleared");
        SelectionOutcome::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<DataRow> {
        serde_json::from_value(json!([
            {"date": "d1", "btc": 1, "eth": null},
            {"date": "d2", "btc": 2, "eth": 7},
            {"date": "d3", "btc": 3, "eth": null},
        ]))
        .expect("rows")
    }

    #[test]
    fn dot_then_other_dot_moves_selection() {
        let rows = rows();
        let mut selection = ActiveSelection::None;
        assert!(matches!(selection.click_dot(&rows, 0, "btc"), SelectionOutcome::Selected(_)));
        assert!(matches!(selection.click_dot(&rows, 2, "btc"), SelectionOutcome::Selected(_)));
        assert_eq!(selection, ActiveSelection::Dot { index: 2, category: "btc".into() });
        assert_eq!(selection.active_legend(), Some("btc"));
    }

    #[test]
    fn category_click_on_multi_value_dot_switches_to_category() {
        let rows = rows();
        let mut selection = ActiveSelection::Dot { index: 1, category: "btc".into() };
        let outcome = selection.click_category(&rows, "btc");
        assert_eq!(
            outcome,
            SelectionOutcome::Selected(ValueChangeEvent::Category { category_clicked: "btc".into() })
        );
        assert_eq!(selection, ActiveSelection::Category("btc".into()));
    }

    #[test]
    fn category_click_on_sole_value_dot_clears() {
        let rows = rows();
        let mut selection = ActiveSelection::Dot { index: 1, category: "eth".into() };
        assert_eq!(selection.click_category(&rows, "eth"), SelectionOutcome::Cleared);
        assert_eq!(selection, ActiveSelection::None);
    }

    #[test]
    fn dot_click_on_sole_value_legend_clears() {
        let rows = rows();
        let mut selection = ActiveSelection::Category("eth".into());
        assert_eq!(selection.click_dot(&rows, 1, "eth"), SelectionOutcome::Cleared);
    }

    #[test]
    fn dot_click_on_multi_value_legend_selects_dot() {
        let rows = rows();
        let mut selection = ActiveSelection::Category("btc".into());
        assert!(matches!(selection.click_dot(&rows, 1, "btc"), SelectionOutcome::Selected(_)));
        assert!(selection.is_active_dot(1, "btc"));
    }

    #[test]
    fn background_click_only_reports_when_something_was_active() {
        let mut selection = ActiveSelection::None;
        assert_eq!(selection.click_background(), SelectionOutcome::Unchanged);
        selection = ActiveSelection::Category("btc".into());
        assert_eq!(selection.click_background(), SelectionOutcome::Cleared);
        assert!(!selection.is_active());
    }

    #[test]
    fn dimming_follows_selection_kind() {
        assert!(!ActiveSelection::None.dims("btc"));
        assert!(ActiveSelection::Category("eth".into()).dims("btc"));
        assert!(!ActiveSelection::Category("btc".into()).dims("btc"));
        assert!(ActiveSelection::Dot { index: 0, category: "btc".into() }.dims("btc"));
    }

    #[test]
    fn out_of_range_dot_is_ignored() {
        let rows = rows();
        let mut selection = ActiveSelection::None;
        assert_eq!(selection.click_dot(&rows, 9, "btc"), SelectionOutcome::Unchanged);
        assert_eq!(selection, ActiveSelection::None);
    }
}

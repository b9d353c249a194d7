//! Series layout for the three stacking modes.

use super::value_objects::StackType;
use crate::domain::market_data::DataRow;

/// Vertical extent of one series at one row, in value space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedPoint {
    /// Raw (or, for percent, normalized) value of this series.
    pub value: f64,
    /// Lower edge; `None` means the area fills down to the axis floor.
    pub lower: Option<f64>,
    pub upper: f64,
}

/// Laid-out points of one category; `None` where the row has no value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayout {
    pub category: String,
    pub points: Vec<Option<StackedPoint>>,
}

/// Lay out every category over `rows` according to `stack_type`.
///
/// Stacking accumulates in category order; null values leave a gap and do
/// not contribute to the running total. `Percent` divides each value by the
/// row total so the cumulative upper edge of the last series is 1.
pub fn layout_series(rows: &[DataRow], categories: &[String], stack_type: StackType) -> Vec<SeriesLayout> {
    let mut layouts: Vec<SeriesLayout> = categories
        .iter()
        .map(|category| SeriesLayout { category: category.clone(), points: Vec::with_capacity(rows.len()) })
        .collect();

    for row in rows {
        let total: f64 = categories.iter().filter_map(|c| row.value(c)).map(f64::abs).sum();
        let mut running = 0.0;
        for (layout, category) in layouts.iter_mut().zip(categories) {
            let point = row.value(category).map(|raw| match stack_type {
                StackType::Default => StackedPoint { value: raw, lower: None, upper: raw },
                StackType::Stacked => {
                    let lower = running;
                    running += raw;
                    StackedPoint { value: raw, lower: Some(lower), upper: running }
                }
                StackType::Percent => {
                    let share = if total == 0.0 { 0.0 } else { raw / total };
                    let lower = running;
                    running += share;
                    StackedPoint { value: share, lower: Some(lower), upper: running }
                }
            });
            layout.points.push(point);
        }
    }

    layouts
}

/// Smallest and largest extent across all laid-out points.
pub fn value_bounds(layouts: &[SeriesLayout]) -> Option<(f64, f64)> {
    layouts
        .iter()
        .flat_map(|layout| layout.points.iter().flatten())
        .flat_map(|p| [Some(p.upper), p.lower].into_iter().flatten())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<DataRow> {
        serde_json::from_value(json!([
            {"d": "a", "x": 1, "y": 3},
            {"d": "b", "x": 2, "y": null},
        ]))
        .expect("rows")
    }

    fn cats() -> Vec<String> {
        vec!["x".into(), "y".into()]
    }

    #[test]
    fn default_layout_keeps_values_independent() {
        let layout = layout_series(&rows(), &cats(), StackType::Default);
        assert_eq!(layout[1].points[0], Some(StackedPoint { value: 3.0, lower: None, upper: 3.0 }));
        assert_eq!(layout[1].points[1], None);
        assert_eq!(value_bounds(&layout), Some((1.0, 3.0)));
    }

    #[test]
    fn stacked_layout_accumulates() {
        let layout = layout_series(&rows(), &cats(), StackType::Stacked);
        assert_eq!(layout[1].points[0], Some(StackedPoint { value: 3.0, lower: Some(1.0), upper: 4.0 }));
        assert_eq!(value_bounds(&layout), Some((0.0, 4.0)));
    }

    #[test]
    fn percent_layout_tops_out_at_one() {
        let layout = layout_series(&rows(), &cats(), StackType::Percent);
        let top = layout[1].points[0].expect("point").upper;
        assert!((top - 1.0).abs() < 1e-12);
        assert_eq!(layout[0].points[1].map(|p| p.upper), Some(1.0));
    }
}

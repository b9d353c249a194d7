use crypto_dashboard_wasm::application::use_cases::{RenderChartUseCase, SceneSize};
use crypto_dashboard_wasm::domain::chart::{ActiveSelection, AreaChartConfig, SelectionOutcome};
use crypto_dashboard_wasm::domain::events::ValueChangeEvent;
use crypto_dashboard_wasm::domain::market_data::{DataRow, PricePoint, PriceSeries};
use insta::assert_json_snapshot;
use quickcheck_macros::quickcheck;
use serde_json::{Value, json};

fn rows(value: Value) -> Vec<DataRow> {
    serde_json::from_value(value).expect("rows")
}

fn two_points() -> Vec<DataRow> {
    rows(json!([
        {"date": "2024-01-01", "price": 100},
        {"date": "2024-01-02", "price": 110}
    ]))
}

/// Collects what an `on_value_change` handler would receive.
fn emitted(outcome: SelectionOutcome) -> Vec<Value> {
    let mut seen = Vec::new();
    outcome.notify(|event| seen.push(serde_json::to_value(event).expect("serializable")));
    seen
}

#[test]
fn dot_click_round_trip_emits_event_then_null() {
    let data = two_points();
    let mut selection = ActiveSelection::default();

    let first = emitted(selection.click_dot(&data, 1, "price"));
    assert_eq!(
        first,
        vec![json!({"eventType": "dot", "categoryClicked": "price", "date": "2024-01-02", "price": 110})]
    );
    assert_json_snapshot!(first[0], @r###"
    {
      "categoryClicked": "price",
      "date": "2024-01-02",
      "eventType": "dot",
      "price": 110
    }
    "###);
    assert_eq!(selection.active_legend(), Some("price"));

    let second = emitted(selection.click_dot(&data, 1, "price"));
    assert_eq!(second, vec![Value::Null]);
    assert_eq!(selection, ActiveSelection::None);
}

#[test]
fn dot_click_on_feed_rows_keeps_integral_prices_as_integers() {
    let data = PriceSeries::new(vec![PricePoint::new("2024-01-01", 100.0), PricePoint::new("2024-01-02", 110.0)])
        .to_rows();
    let mut selection = ActiveSelection::default();

    assert_eq!(
        emitted(selection.click_dot(&data, 1, "price")),
        vec![json!({"eventType": "dot", "categoryClicked": "price", "date": "2024-01-02", "price": 110})]
    );
}

#[quickcheck]
fn clicking_the_same_dot_twice_returns_to_none(values: Vec<Option<u16>>, pick: usize) -> bool {
    let data: Vec<DataRow> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            DataRow::new()
                .with("date", json!(format!("d{i}")))
                .with("a", v.map_or(Value::Null, |v| json!(v)))
                .with("b", json!(i))
        })
        .collect();
    if data.is_empty() {
        return true;
    }
    let index = pick % data.len();
    let mut selection = ActiveSelection::default();

    let first = selection.click_dot(&data, index, "b");
    let second = selection.click_dot(&data, index, "b");
    matches!(first, SelectionOutcome::Selected(ValueChangeEvent::Dot { .. }))
        && second == SelectionOutcome::Cleared
        && selection == ActiveSelection::None
}

#[test]
fn category_click_toggles_and_switches() {
    let data = rows(json!([{"d": "1", "a": 1, "b": 2}, {"d": "2", "a": 3, "b": 4}]));
    let mut selection = ActiveSelection::default();

    assert_eq!(emitted(selection.click_category(&data, "a")), vec![json!({"eventType": "category", "categoryClicked": "a"})]);
    assert_eq!(emitted(selection.click_category(&data, "b")), vec![json!({"eventType": "category", "categoryClicked": "b"})]);
    assert_eq!(emitted(selection.click_category(&data, "b")), vec![Value::Null]);
}

#[test]
fn dot_click_while_category_is_active_selects_the_dot() {
    let data = rows(json!([{"d": "1", "a": 1, "b": 2}, {"d": "2", "a": 3, "b": 4}]));
    let mut selection = ActiveSelection::Category("a".into());
    let outcome = selection.click_dot(&data, 0, "a");
    assert!(matches!(outcome, SelectionOutcome::Selected(_)));
    assert_eq!(selection.active_dot(), Some((0, "a")));
    assert!(selection.dims("b"));
}

#[test]
fn background_click_only_reports_when_something_was_selected() {
    let mut selection = ActiveSelection::default();
    assert!(emitted(selection.click_background()).is_empty());

    selection = ActiveSelection::Category("a".into());
    assert_eq!(emitted(selection.click_background()), vec![Value::Null]);
}

#[test]
fn single_value_category_keeps_its_marker_through_legend_toggles() {
    let data = rows(json!([
        {"d": "1", "many": 1, "solo": null},
        {"d": "2", "many": 2, "solo": 5},
        {"d": "3", "many": 3, "solo": null}
    ]));
    let config = AreaChartConfig::new("d", vec!["many".into(), "solo".into()]);
    let size = SceneSize::new(400.0, 200.0);
    let solo_markers = |selection: &ActiveSelection| {
        RenderChartUseCase::new(&config)
            .execute(&data, selection, size)
            .dots
            .into_iter()
            .filter(|dot| dot.category == "solo")
            .collect::<Vec<_>>()
    };

    let mut selection = ActiveSelection::default();
    assert_eq!(solo_markers(&selection).len(), 1);

    assert!(matches!(selection.click_category(&data, "solo"), SelectionOutcome::Selected(_)));
    let markers = solo_markers(&selection);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].opacity, 1.0);

    assert_eq!(selection.click_category(&data, "solo"), SelectionOutcome::Cleared);
    assert_eq!(solo_markers(&selection).len(), 1);

    selection.click_category(&data, "many");
    let dimmed = solo_markers(&selection);
    assert_eq!(dimmed.len(), 1);
    assert!(dimmed[0].opacity < 1.0);
}

#[test]
fn sole_value_dot_click_under_its_own_legend_clears() {
    let data = rows(json!([{"d": "1", "solo": null}, {"d": "2", "solo": 5}]));
    let mut selection = ActiveSelection::Category("solo".into());
    assert_eq!(selection.click_dot(&data, 1, "solo"), SelectionOutcome::Cleared);

    let mut selection = ActiveSelection::Dot { index: 1, category: "solo".into() };
    assert_eq!(selection.click_category(&data, "solo"), SelectionOutcome::Cleared);
}

use crate::domain::chart::ValueFormatter;
use crate::domain::events::TooltipEvent;
use leptos::*;

/// Tooltip value text: `"$"` followed by the formatted value.
pub fn tooltip_value(formatter: &ValueFormatter, value: f64) -> String {
    format!("${}", formatter.format(value))
}

/// Default tooltip body: hovered label and one row per series.
#[component]
pub fn ChartTooltip(event: TooltipEvent, value_formatter: ValueFormatter) -> impl IntoView {
    let rows = event
        .payload
        .iter()
        .map(|item| {
            view! {
                <div class="tooltip-row">
                    <span class="tooltip-swatch" style:background-color=item.color.css()></span>
                    <p class="tooltip-category">{item.category.clone()}</p>
                    <p class="tooltip-value">{tooltip_value(&value_formatter, item.value)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="chart-tooltip">
            <div class="tooltip-label">
                <p>{event.label.clone().unwrap_or_default()}</p>
            </div>
            <div class="tooltip-rows">{rows}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_text_is_dollar_prefixed() {
        let plain = ValueFormatter::default();
        assert_eq!(tooltip_value(&plain, 110.0), "$110");
        let fixed = ValueFormatter::new(|v| format!("{:.2}", v));
        assert_eq!(tooltip_value(&fixed, 1.5), "$1.50");
    }
}

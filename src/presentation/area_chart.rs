use crate::application::use_cases::{
    ChartScene, DOT_RADIUS, DotMarker, HIT_STROKE_WIDTH, RenderChartUseCase, STROKE_WIDTH, SceneSize,
};
use crate::domain::chart::{
    ActiveSelection, AreaChartConfig, CategoryColors, Color, SelectionOutcome, TooltipTracker, tooltip_payload,
};
use crate::domain::events::{TooltipEvent, ValueChangeEvent};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::DataRow;
use crate::event_utils::on_window_resize;
use crate::presentation::legend::Legend;
use crate::presentation::tooltip::ChartTooltip;
use leptos::html::Div;
use leptos::*;
use std::sync::atomic::{AtomicUsize, Ordering};

const DEFAULT_WIDTH: f64 = 800.0;
const TOOLTIP_OFFSET: f64 = 20.0;

fn next_chart_id() -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("area-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Interactive SVG area chart.
///
/// Dot, line and legend clicks drive an [`ActiveSelection`]; each change is
/// reported through `on_value_change`. Without that handler the chart is
/// read-only.
#[component]
pub fn AreaChart(
    #[prop(into)] data: Signal<Vec<DataRow>>,
    #[prop(into)] config: Signal<AreaChartConfig>,
    #[prop(optional)] on_value_change: Option<Callback<Option<ValueChangeEvent>>>,
    #[prop(optional)] tooltip_callback: Option<Callback<TooltipEvent>>,
    #[prop(optional)] custom_tooltip: Option<Callback<TooltipEvent, View>>,
    #[prop(optional, into)] class: String,
    #[prop(default = 320.0)] height: f64,
) -> impl IntoView {
    let container = create_node_ref::<Div>();
    let (width, set_width) = create_signal(DEFAULT_WIDTH);
    let id_prefix = next_chart_id();

    let measure = move || {
        if let Some(element) = container.get_untracked() {
            let measured = f64::from(element.client_width());
            if measured > 0.0 {
                set_width.set(measured);
            }
        }
    };
    create_effect(move |_| {
        if container.get().is_some() {
            measure();
        }
    });
    let resize = store_value(Some(on_window_resize(move |_| measure())));
    on_cleanup(move || {
        resize.try_update_value(|handle| handle.take());
    });

    let selection = create_rw_signal(ActiveSelection::None);
    let hover = create_rw_signal(None::<usize>);
    let tracker = store_value(TooltipTracker::new());

    let categories = create_memo(move |_| config.with(|c| c.categories.clone()));
    let palette = create_memo(move |_| config.with(|c| c.colors.clone()));
    let colors = create_memo(move |_| CategoryColors::construct(&categories.get(), &palette.get()));

    let scene = create_memo(move |_| {
        let size = SceneSize::new(width.get(), height);
        let selection = selection.get();
        let colors = colors.get();
        data.with(|rows| {
            config.with(|cfg| {
                RenderChartUseCase::with_colors(cfg, colors)
                    .with_id_prefix(id_prefix.clone())
                    .execute(rows, &selection, size)
            })
        })
    });

    let has_handler = on_value_change.is_some();
    let emit = move |outcome: SelectionOutcome| {
        if let Some(callback) = on_value_change {
            outcome.notify(|event| callback.call(event));
        }
    };
    let click_dot = move |index: usize, category: String| {
        if !has_handler {
            return;
        }
        let outcome = selection
            .try_update(|selection| data.with_untracked(|rows| selection.click_dot(rows, index, &category)))
            .unwrap_or(SelectionOutcome::Unchanged);
        emit(outcome);
    };
    let click_category = move |category: String| {
        if !has_handler {
            return;
        }
        let outcome = selection
            .try_update(|selection| data.with_untracked(|rows| selection.click_category(rows, &category)))
            .unwrap_or(SelectionOutcome::Unchanged);
        emit(outcome);
    };
    let click_background = move |_: ev::MouseEvent| {
        if !has_handler || !selection.with_untracked(ActiveSelection::is_active) {
            return;
        }
        let outcome = selection.try_update(|selection| selection.click_background()).unwrap_or(SelectionOutcome::Unchanged);
        emit(outcome);
    };

    let on_mouse_move = move |ev: ev::MouseEvent| {
        let index = scene.with_untracked(|scene| scene.index_at(f64::from(ev.offset_x())));
        if hover.get_untracked() != index {
            hover.set(index);
        }
    };
    let on_mouse_leave = move |_: ev::MouseEvent| hover.set(None);

    let tooltip_event = create_memo(move |_| {
        let index = hover.get();
        let key = config.with(|c| c.index.clone());
        let categories = categories.get();
        let colors = colors.get();
        data.with(|rows| match index.and_then(|i| rows.get(i)) {
            Some(row) => TooltipEvent {
                active: true,
                payload: tooltip_payload(row, &key, &categories, &colors),
                label: Some(row.label(&key)),
            },
            None => TooltipEvent { active: false, payload: Vec::new(), label: None },
        })
    });

    create_effect(move |_| {
        let event = tooltip_event.get();
        let Some(callback) = tooltip_callback else {
            return;
        };
        let changed = tracker
            .try_update_value(|tracker| tracker.observe(event.active, event.label.clone(), event.payload.clone()))
            .flatten();
        if let Some(event) = changed {
            crate::log_trace!(LogComponent::Presentation("AreaChart"), "tooltip {:?}", event.label);
            callback.call(event);
        }
    });

    let legend = move || {
        let (show, slider, position, y_axis_width, show_y) = config.with(|c| {
            (c.show_legend, c.enable_legend_slider, c.legend_position, c.y_axis_width, c.show_y_axis)
        });
        let legend_offset = if show_y { y_axis_width } else { 0.0 };
        show.then(|| {
            view! {
                <Legend
                    categories=categories
                    colors=colors
                    active_legend=Signal::derive(move || selection.with(|s| s.active_legend().map(str::to_string)))
                    on_click_legend_item=has_handler.then(|| Callback::new(click_category))
                    enable_legend_slider=slider
                    legend_position=position
                    y_axis_width=legend_offset
                />
            }
        })
    };

    let static_layer = move || scene.with(|scene| scene_view(scene, has_handler, click_dot, click_category));

    let hover_layer = move || {
        let index = hover.get()?;
        scene.with(|scene| {
            if scene.is_empty() {
                return None;
            }
            let x = scene.plot.index_to_x(index);
            let markers = scene
                .hover_markers(index)
                .into_iter()
                .map(|marker| dot_view(marker, has_handler, click_dot))
                .collect_view();
            Some(view! {
                <g class="hover-layer">
                    <line
                        x1=x
                        y1=scene.plot.top
                        x2=x
                        y2=scene.plot.bottom()
                        stroke=Color::ACCENT.to_css()
                        stroke-width=1
                    />
                    {markers}
                </g>
            })
        })
    };

    let tooltip = move || {
        let event = tooltip_event.get();
        if !config.with(|c| c.show_tooltip) || !event.active {
            return None;
        }
        let x = hover.get().map(|i| scene.with(|s| s.plot.index_to_x(i))).unwrap_or(0.0);
        let body = match custom_tooltip {
            Some(render) => render.call(event),
            None => {
                let value_formatter = config.with(|c| c.value_formatter.clone());
                view! { <ChartTooltip event=event value_formatter=value_formatter /> }.into_view()
            }
        };
        Some(view! {
            <div class="chart-tooltip-wrapper" style:left=format!("{}px", x + TOOLTIP_OFFSET) style:top="0px">
                {body}
            </div>
        })
    };

    view! {
        <div class=format!("area-chart {}", class) node_ref=container>
            {legend}
            <div class="area-chart-surface">
                <svg
                    width="100%"
                    height=height
                    class:interactive=has_handler
                    on:click=click_background
                    on:mousemove=on_mouse_move
                    on:mouseleave=on_mouse_leave
                >
                    {static_layer}
                    {hover_layer}
                </svg>
                {tooltip}
            </div>
        </div>
    }
}

fn dot_view(marker: DotMarker, has_handler: bool, click_dot: impl Fn(usize, String) + Copy + 'static) -> View {
    let DotMarker { category, index, x, y, color, opacity, active } = marker;
    view! {
        <circle
            class="dot"
            class:active=active
            class:interactive=has_handler
            cx=x
            cy=y
            r=DOT_RADIUS
            fill=color.css()
            stroke=Color::WHITE.to_css()
            stroke-width=STROKE_WIDTH
            opacity=opacity
            on:click=move |ev: ev::MouseEvent| {
                ev.stop_propagation();
                click_dot(index, category.clone());
            }
        />
    }
    .into_view()
}

fn scene_view(
    scene: &ChartScene,
    has_handler: bool,
    click_dot: impl Fn(usize, String) + Copy + 'static,
    click_category: impl Fn(String) + Copy + 'static,
) -> View {
    if scene.is_empty() {
        return View::default();
    }
    let plot = &scene.plot;

    let grid = scene
        .grid_lines
        .iter()
        .map(|&x| {
            view! { <line x1=x y1=plot.top x2=x y2=plot.bottom() stroke=Color::GRID.to_css() stroke-width=1 /> }
        })
        .collect_view();

    let y_axis = scene.show_y_axis.then(|| {
        scene
            .y_ticks
            .iter()
            .map(|tick| {
                view! {
                    <text x={plot.left - 3.0} y=tick.position text-anchor="end" dominant-baseline="middle" class="axis-tick">
                        {tick.label.clone()}
                    </text>
                }
            })
            .collect_view()
    });

    let x_axis = scene.show_x_axis.then(|| {
        scene
            .x_ticks
            .iter()
            .map(|tick| {
                view! {
                    <text x=tick.position y={plot.bottom() + 18.0} text-anchor="middle" class="axis-tick">
                        {tick.label.clone()}
                    </text>
                }
            })
            .collect_view()
    });

    let areas = scene
        .series
        .iter()
        .map(|series| {
            let color = series.color.css();
            let stops = series
                .stops
                .iter()
                .map(|stop| {
                    view! {
                        <stop offset=stop.offset.unwrap_or("0%") stop-color=color.clone() stop-opacity=stop.opacity />
                    }
                })
                .collect_view();
            view! {
                <g class="series">
                    <defs>
                        <linearGradient id=series.gradient_id.clone() x1="0" y1="0" x2="0" y2="1">
                            {stops}
                        </linearGradient>
                    </defs>
                    <path d=series.area_path.clone() fill=format!("url(#{})", series.gradient_id) stroke="none" />
                    <path
                        d=series.line_path.clone()
                        fill="none"
                        stroke=color.clone()
                        stroke-width=STROKE_WIDTH
                        stroke-opacity=series.stroke_opacity
                        stroke-linejoin="round"
                        stroke-linecap="round"
                    />
                </g>
            }
        })
        .collect_view();

    let hit_lines = has_handler.then(|| {
        scene
            .series
            .iter()
            .map(|series| {
                let category = series.category.clone();
                view! {
                    <path
                        class="hit-line"
                        d=series.line_path.clone()
                        fill="none"
                        stroke="transparent"
                        stroke-width=HIT_STROKE_WIDTH
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            click_category(category.clone());
                        }
                    />
                }
            })
            .collect_view()
    });

    let dots = scene
        .dots
        .iter()
        .cloned()
        .map(|marker| dot_view(marker, has_handler, click_dot))
        .collect_view();

    view! {
        <g class="grid">{grid}</g>
        <g class="y-axis">{y_axis}</g>
        <g class="x-axis">{x_axis}</g>
        {areas}
        {hit_lines}
        <g class="dots">{dots}</g>
    }
    .into_view()
}

use crate::domain::chart::{
    AutoRepeat, CategoryColors, KeyRepeat, LegendOverflow, LegendPosition, ScrollDirection, ScrollMetrics,
    legend::{SCROLL_SETTLE_MS, item_opacity},
};
use crate::domain::logging::LogComponent;
use crate::event_utils::{WindowEventListenerHandle, on_window_resize};
use crate::infrastructure::GlooScheduler;
use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Fallback width of the paging controls before they are measured.
const CONTROLS_WIDTH: f64 = 48.0;

fn read_metrics(node: NodeRef<Div>) -> Option<ScrollMetrics> {
    let element = node.get_untracked()?;
    Some(ScrollMetrics {
        scroll_left: f64::from(element.scroll_left()),
        scroll_width: f64::from(element.scroll_width()),
        client_width: f64::from(element.client_width()),
    })
}

fn justify(position: LegendPosition) -> &'static str {
    match position {
        LegendPosition::Left => "flex-start",
        LegendPosition::Center => "center",
        LegendPosition::Right => "flex-end",
    }
}

/// Category legend with optional slider paging.
#[component]
pub fn Legend(
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] colors: Signal<CategoryColors>,
    #[prop(into)] active_legend: Signal<Option<String>>,
    #[prop(default = None)] on_click_legend_item: Option<Callback<String>>,
    #[prop(optional)] enable_legend_slider: bool,
    #[prop(optional)] legend_position: LegendPosition,
    #[prop(optional)] y_axis_width: f64,
) -> impl IntoView {
    let scroll_ref = create_node_ref::<Div>();
    let controls_ref = create_node_ref::<Div>();
    let (overflow, set_overflow) = create_signal(LegendOverflow::default());
    let settle = store_value(None::<Timeout>);
    let keys = store_value(KeyRepeat::new(GlooScheduler::new()));
    let resize = store_value(None::<WindowEventListenerHandle>);

    let check_scroll = move || {
        if let Some(metrics) = read_metrics(scroll_ref) {
            set_overflow.set(metrics.overflow());
        }
    };

    let scroll_page = move |direction: ScrollDirection| {
        let (Some(element), Some(metrics)) = (scroll_ref.get_untracked(), read_metrics(scroll_ref)) else {
            return;
        };
        let controls = controls_ref
            .get_untracked()
            .map(|controls| f64::from(controls.client_width()))
            .unwrap_or(CONTROLS_WIDTH);
        let target = metrics.page_target(direction, controls);
        crate::log_debug!(LogComponent::Presentation("Legend"), "page {:?} to {}", direction, target);

        let options = ScrollToOptions::new();
        options.set_left(target);
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_to_with_scroll_to_options(&options);

        settle.set_value(Some(GlooScheduler::new().after(SCROLL_SETTLE_MS, check_scroll)));
    };

    if enable_legend_slider {
        create_effect(move |_| {
            if scroll_ref.get().is_some() {
                check_scroll();
            }
        });
        resize.set_value(Some(on_window_resize(move |_| check_scroll())));
    }

    on_cleanup(move || {
        resize.try_update_value(|handle| handle.take());
        settle.try_update_value(|timeout| timeout.take());
        keys.try_update_value(|keys| keys.release());
    });

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if !enable_legend_slider {
            return;
        }
        let Some(direction) = ScrollDirection::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        keys.update_value(|keys| {
            keys.key_down(direction, scroll_page);
        });
    };

    let on_keyup = move |ev: ev::KeyboardEvent| {
        if let Some(direction) = ScrollDirection::from_key(&ev.key()) {
            keys.update_value(|keys| keys.key_up(direction));
        }
    };

    let items = move || {
        let active = active_legend.get();
        let names = categories.get();
        colors.with(|colors| {
            names
                .into_iter()
                .map(|name| {
                    let color = colors.color_for(&name);
                    let opacity = item_opacity(active.as_deref(), &name);
                    let label = name.clone();
                    view! {
                        <li
                            class="legend-item"
                            class:interactive=on_click_legend_item.is_some()
                            style:opacity=opacity.to_string()
                            on:click=move |ev: ev::MouseEvent| {
                                ev.stop_propagation();
                                if let Some(callback) = on_click_legend_item {
                                    callback.call(name.clone());
                                }
                            }
                        >
                            <span class="legend-swatch" style:background-color=color.css()></span>
                            <p class="legend-label">{label}</p>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class="legend"
            tabindex="0"
            style:justify-content=justify(legend_position)
            style:padding-left=format!("{}px", y_axis_width)
            on:keydown=on_keydown
            on:keyup=on_keyup
        >
            <div
                class="legend-scroll-area"
                class:slider=enable_legend_slider
                node_ref=scroll_ref
            >
                <ol class="legend-items">{items}</ol>
            </div>
            {move || {
                (enable_legend_slider && overflow.get().any())
                    .then(|| {
                        view! {
                            <div class="legend-controls" node_ref=controls_ref>
                                <ScrollButton
                                    direction=ScrollDirection::Left
                                    disabled=Signal::derive(move || !overflow.get().allows(ScrollDirection::Left))
                                    on_page=Callback::new(scroll_page)
                                />
                                <ScrollButton
                                    direction=ScrollDirection::Right
                                    disabled=Signal::derive(move || !overflow.get().allows(ScrollDirection::Right))
                                    on_page=Callback::new(scroll_page)
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Paging control: pages once on press, then every repeat interval until released.
#[component]
pub fn ScrollButton(
    direction: ScrollDirection,
    #[prop(into)] disabled: Signal<bool>,
    on_page: Callback<ScrollDirection>,
) -> impl IntoView {
    let repeat = store_value(AutoRepeat::new(GlooScheduler::new()));

    let stop = move || {
        repeat.try_update_value(|repeat| repeat.stop());
    };

    create_effect(move |_| {
        if disabled.get() {
            stop();
        }
    });
    on_cleanup(stop);

    let press = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if disabled.get_untracked() {
            return;
        }
        on_page.call(direction);
        repeat.update_value(|repeat| repeat.start(move || on_page.call(direction)));
    };

    let (label, glyph) = match direction {
        ScrollDirection::Left => ("Scroll legend left", "‹"),
        ScrollDirection::Right => ("Scroll legend right", "›"),
    };

    view! {
        <button
            type="button"
            class="legend-scroll-button"
            aria-label=label
            disabled=move || disabled.get()
            on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            on:mousedown=press
            on:mouseup=move |_| stop()
            on:mouseleave=move |_| stop()
        >
            {glyph}
        </button>
    }
}

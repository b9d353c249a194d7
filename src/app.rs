use leptos::*;
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::{
    application::{ChartDataUseCase, DashboardConfig, DashboardStore, PriceSummary, format_usd},
    domain::{
        chart::{AreaChartConfig, ChartColor, ValueFormatter},
        events::{DashboardEvent, DomainEvent, ValueChangeEvent},
        logging::{LogComponent, LogLevel, get_logger},
        market_data::{PriceRepository, RangeToken},
        state::{Intent, InteractionState},
    },
    infrastructure::StaticPriceFeed,
    presentation::AreaChart,
};

const TABS: [&str; 5] = ["Summary", "Chart", "Statistics", "Analysis", "Settings"];
const CHART_TAB: &str = "Chart";

/// Root component: header readout, tab bar and the chart tab.
#[component]
pub fn App(#[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let mut initial = DashboardStore::new(config.default_range);
    initial.subscribe(log_dashboard_event);
    let store = create_rw_signal(initial);
    let state = create_memo(move |_| store.with(|store| store.state().clone()));
    let dispatch = Callback::new(move |intent: Intent| {
        store.update(|store| {
            store.dispatch(intent);
        });
    });

    let feed = match StaticPriceFeed::embedded() {
        Ok(feed) => Some(feed),
        Err(e) => {
            crate::log_error!(LogComponent::Presentation("App"), "price feed unavailable: {}", e);
            None
        }
    };

    let currency = config.currency.clone();
    let summary = create_memo(move |_| {
        let series = state
            .with(InteractionState::primary_range)
            .zip(feed)
            .map(|(range, feed)| feed.series_or_empty(range))
            .unwrap_or_default();
        PriceSummary::from_series(&series, &currency)
    });

    view! {
        <style>
            {r#"
            .dashboard {
                font-family: 'Circular Std', -apple-system, BlinkMacSystemFont, sans-serif;
                color: #1A243A;
                background: #FFFFFF;
                min-height: 100vh;
                padding: 0 40px;
            }

            .dashboard.full-screen {
                position: fixed;
                inset: 0;
                z-index: 100;
                overflow: auto;
            }

            .price-display {
                display: flex;
                align-items: center;
                gap: 8px;
                margin: 112px 0 48px;
            }

            .price-value {
                font-size: 72px;
                margin: 0;
            }

            .price-change { font-size: 18px; color: #67BF6B; }
            .price-change.loss { color: #E5484D; }
            .price-currency { font-size: 24px; color: #BDBEBF; align-self: flex-start; margin-top: 4px; }

            .menu-tabs {
                display: flex;
                gap: 8px;
                border-bottom: 1px solid #EFF1F3;
            }

            .menu-tab {
                background: transparent;
                border: none;
                border-bottom: 3px solid transparent;
                color: #6F7177;
                font-size: 18px;
                padding: 8px 12px;
                cursor: pointer;
            }

            .menu-tab.active { color: #1A243A; border-bottom-color: #4B40EE; }

            .tab-content { margin: 16px 0 0 8px; }

            .actions {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 24px 128px;
                margin-bottom: 24px;
            }

            .action-button, .time-button {
                background: transparent;
                border: 1px solid transparent;
                color: #6F7177;
                font-size: 18px;
                padding: 8px 16px;
                cursor: pointer;
            }

            .action-button:hover, .time-button:hover { color: #1A243A; }
            .action-button.active { color: #1A243A; }
            .time-button.active { background: #4B40EE; border-radius: 6px; color: #FFFFFF; }

            .area-chart { position: relative; width: 100%; }
            .area-chart-surface { position: relative; }
            .area-chart svg.interactive { cursor: pointer; }
            .axis-tick { fill: #6F7177; font-size: 12px; }

            .legend { display: flex; align-items: center; outline: none; }
            .legend-scroll-area { overflow: hidden; }
            .legend-scroll-area.slider { overflow-x: auto; scrollbar-width: none; }
            .legend-items { display: flex; gap: 12px; margin: 0; padding: 0; list-style: none; white-space: nowrap; }
            .legend-item { display: flex; align-items: center; gap: 6px; font-size: 14px; }
            .legend-item.interactive { cursor: pointer; }
            .legend-swatch { width: 8px; height: 8px; border-radius: 2px; }
            .legend-label { margin: 0; }
            .legend-controls { display: flex; gap: 4px; padding-left: 8px; }
            .legend-scroll-button { border: none; background: transparent; font-size: 16px; cursor: pointer; }
            .legend-scroll-button:disabled { opacity: 0.3; cursor: default; }

            .chart-tooltip-wrapper { position: absolute; pointer-events: none; z-index: 10; }
            .chart-tooltip {
                background: #FFFFFF;
                border: 1px solid #E5E7EB;
                border-radius: 6px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                font-size: 14px;
                min-width: 160px;
            }
            .tooltip-label { border-bottom: 1px solid #E5E7EB; padding: 8px 16px; }
            .tooltip-label p { margin: 0; font-weight: 500; }
            .tooltip-rows { padding: 8px 16px; }
            .tooltip-row { display: flex; align-items: center; gap: 8px; }
            .tooltip-row p { margin: 0; }
            .tooltip-swatch { width: 8px; height: 8px; border-radius: 50%; }
            .tooltip-value { margin-left: auto !important; font-weight: 500; }

            .nothing { display: grid; place-content: center; height: 320px; font-size: 20px; }
            "#}
        </style>
        <main class="dashboard" class=("full-screen", move || state.with(InteractionState::full_screen))>
            <PriceDisplay summary=summary />
            <MenuTabs>
                <Actions state=state dispatch=dispatch />
                <AreaChartHero state=state feed=feed palette=config.palette.clone() />
            </MenuTabs>
        </main>
    }
}

fn log_dashboard_event(event: &DashboardEvent) {
    get_logger().log_with_metadata(
        LogLevel::Debug,
        LogComponent::Application("DashboardStore"),
        event.event_type(),
        &format!("{:?}", event),
    );
}

/// Header readout of the first active range.
#[component]
fn PriceDisplay(#[prop(into)] summary: Signal<PriceSummary>) -> impl IntoView {
    view! {
        <section class="price-display">
            <div>
                <h1 class="price-value">{move || summary.with(|s| s.price.clone())}</h1>
                <span class="price-change" class:loss=move || !summary.with(|s| s.is_gain)>
                    {move || summary.with(|s| s.change.clone())}
                </span>
            </div>
            <p class="price-currency">{move || summary.with(|s| s.currency.clone())}</p>
        </section>
    }
}

#[component]
fn MenuTabs(children: ChildrenFn) -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(CHART_TAB);

    let tabs = TABS
        .iter()
        .map(|&tab| {
            view! {
                <button
                    type="button"
                    class="menu-tab"
                    class:active=move || active_tab.get() == tab
                    on:click=move |_| set_active_tab.set(tab)
                >
                    <p class="tab-title">{tab}</p>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="menu-tabs">{tabs}</nav>
        <div class="tab-content">
            {move || (active_tab.get() == CHART_TAB).then(|| children())}
        </div>
    }
}

/// Full-screen and compare toggles next to the range selector.
#[component]
fn Actions(#[prop(into)] state: Signal<InteractionState>, dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <section class="actions">
            <div>
                <button
                    type="button"
                    class="action-button"
                    class:active=move || state.with(InteractionState::full_screen)
                    on:click=move |_| dispatch.call(Intent::ToggleFullScreen)
                >
                    "⤢ Fullscreen"
                </button>
                <button
                    type="button"
                    class="action-button"
                    class:active=move || state.with(InteractionState::compare)
                    on:click=move |_| dispatch.call(Intent::ToggleCompare)
                >
                    "⊕ Compare"
                </button>
            </div>
            <TimeBar state=state dispatch=dispatch />
        </section>
    }
}

#[component]
fn TimeBar(#[prop(into)] state: Signal<InteractionState>, dispatch: Callback<Intent>) -> impl IntoView {
    RangeToken::iter()
        .map(|range| {
            view! {
                <button
                    type="button"
                    class="time-button"
                    class:active=move || state.with(|s| s.is_active(range))
                    on:click=move |_| dispatch.call(Intent::SetActiveRange(range))
                >
                    {range.label().to_string()}
                </button>
            }
        })
        .collect_view()
}

#[component]
fn AreaChartHero(
    #[prop(into)] state: Signal<InteractionState>,
    feed: Option<&'static StaticPriceFeed>,
    palette: Vec<ChartColor>,
) -> impl IntoView {
    let series = create_memo(move |_| match feed {
        Some(feed) => state.with(|state| ChartDataUseCase::new(feed).execute(state)),
        None => Default::default(),
    });

    let data = Signal::derive(move || series.with(|s| s.rows.clone()));
    let config = Signal::derive(move || {
        let mut config = AreaChartConfig::new("date", series.with(|s| s.categories.clone()))
            .with_colors(palette.clone())
            .with_value_formatter(ValueFormatter::new(format_usd));
        config.show_legend = state.with(InteractionState::compare);
        config.enable_legend_slider = true;
        config
    });

    let on_value_change = Callback::new(|event: Option<ValueChangeEvent>| {
        let json = event.as_ref().map_or(Value::Null, ValueChangeEvent::to_json);
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Presentation("AreaChartHero"),
            "value change",
            &json.to_string(),
        );
    });

    let is_empty = create_memo(move |_| series.with(|s| s.is_empty()));

    view! {
        <section class="chart-hero">
            {move || {
                if is_empty.get() {
                    view! { <Nothing /> }.into_view()
                } else {
                    view! { <AreaChart data=data config=config on_value_change=on_value_change class="hero-chart" /> }
                        .into_view()
                }
            }}
        </section>
    }
}

#[component]
fn Nothing() -> impl IntoView {
    view! {
        <section class="nothing">
            <span>"Nothing to Show"</span>
        </section>
    }
}

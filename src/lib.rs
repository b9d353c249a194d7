use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::DashboardConfig;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Install the browser logger and mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::default();
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "mounting dashboard, default range {}",
        config.default_range
    );

    mount_to_body(move || view! { <App config=config /> });
}

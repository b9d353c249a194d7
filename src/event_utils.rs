use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

fn browser_window() -> RenderingResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| AppError::RenderingError("window unavailable".to_string()))
}

/// A window listener that is detached when the handle is dropped.
pub struct WindowEventListenerHandle {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl WindowEventListenerHandle {
    pub fn event_name(&self) -> &str {
        &self.event_name
    }
}

impl Drop for WindowEventListenerHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

pub fn window_event_listener_with_options<E>(
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    let attached = browser_window().and_then(|window| {
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| AppError::RenderingError(format!("{:?}", e)))
    });
    if let Err(e) = attached {
        crate::log_warn!(LogComponent::Infrastructure("EventListener"), "{} listener not attached: {}", event_name, e);
    }

    WindowEventListenerHandle { event_name, callback, capture: options.capture }
}

/// Passive `resize` listener on the window.
pub fn on_window_resize(cb: impl FnMut(web_sys::UiEvent) + 'static) -> WindowEventListenerHandle {
    window_event_listener_with_options(leptos::ev::resize, &EventOptions::default(), cb)
}

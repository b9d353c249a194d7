use crate::domain::{
    events::{DashboardEvent, EventDispatcher, InMemoryEventDispatcher},
    market_data::RangeToken,
    state::{Intent, InteractionState},
};

/// Owner of the dashboard interaction state.
///
/// Every mutation goes through [`DashboardStore::dispatch`], which applies the
/// intent and notifies subscribers before returning.
pub struct DashboardStore {
    state: InteractionState,
    dispatcher: InMemoryEventDispatcher,
}

impl DashboardStore {
    pub fn new(initial: RangeToken) -> Self {
        Self { state: InteractionState::new(initial), dispatcher: InMemoryEventDispatcher::new() }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn subscribe(&mut self, handler: impl Fn(&DashboardEvent) + 'static) {
        self.dispatcher.subscribe_to_dashboard_events(handler);
    }

    pub fn dispatch(&mut self, intent: Intent) -> DashboardEvent {
        let event = self.state.apply(intent);
        self.dispatcher.publish_dashboard_event(event.clone());
        event
    }

    pub fn set_active_range(&mut self, range: RangeToken) -> DashboardEvent {
        self.dispatch(Intent::SetActiveRange(range))
    }

    pub fn toggle_full_screen(&mut self) -> DashboardEvent {
        self.dispatch(Intent::ToggleFullScreen)
    }

    pub fn toggle_compare(&mut self) -> DashboardEvent {
        self.dispatch(Intent::ToggleCompare)
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(RangeToken::default())
    }
}

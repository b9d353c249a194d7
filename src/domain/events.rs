use crate::domain::chart::ChartColor;
use crate::domain::market_data::{DataRow, RangeToken};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Selection reported through `on_value_change`; `None` on the callback stands for deselection.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueChangeEvent {
    Dot { category_clicked: String, row: DataRow },
    Category { category_clicked: String },
}

impl ValueChangeEvent {
    pub fn category_clicked(&self) -> &str {
        match self {
            ValueChangeEvent::Dot { category_clicked, .. }
            | ValueChangeEvent::Category { category_clicked } => category_clicked,
        }
    }

    /// Flat JSON object: `eventType`, `categoryClicked`, then the row fields of a dot.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("eventType".into(), Value::String(self.event_type().to_lowercase()));
        object.insert("categoryClicked".into(), Value::String(self.category_clicked().to_string()));
        if let ValueChangeEvent::Dot { row, .. } = self {
            for (key, value) in row.fields() {
                object.insert(key.clone(), value.clone());
            }
        }
        Value::Object(object)
    }
}

impl DomainEvent for ValueChangeEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ValueChangeEvent::Dot { .. } => "Dot",
            ValueChangeEvent::Category { .. } => "Category",
        }
    }
}

impl Serialize for ValueChangeEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// One tooltip row: a series value at the hovered index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipPayloadItem {
    pub category: String,
    pub value: f64,
    /// Index-field label of the hovered row.
    pub index: String,
    #[serde(serialize_with = "serialize_color")]
    pub color: ChartColor,
    pub payload: DataRow,
}

fn serialize_color<S: Serializer>(color: &ChartColor, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(color.as_ref())
}

/// Hover state handed to `tooltip_callback`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipEvent {
    pub active: bool,
    pub payload: Vec<TooltipPayloadItem>,
    pub label: Option<String>,
}

impl DomainEvent for TooltipEvent {
    fn event_type(&self) -> &'static str {
        "TooltipChanged"
    }
}

/// Changes of the dashboard interaction state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    RangesChanged { active: Vec<RangeToken> },
    FullScreenToggled { full_screen: bool },
    CompareToggled { compare: bool },
}

impl DomainEvent for DashboardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DashboardEvent::RangesChanged { .. } => "RangesChanged",
            DashboardEvent::FullScreenToggled { .. } => "FullScreenToggled",
            DashboardEvent::CompareToggled { .. } => "CompareToggled",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_dashboard_event(&self, event: DashboardEvent);
}

/// Synchronous in-memory dispatcher; handlers run in subscription order.
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    dashboard_handlers: Vec<Box<dyn Fn(&DashboardEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { dashboard_handlers: Vec::new() }
    }

    pub fn subscribe_to_dashboard_events<F>(&mut self, handler: F)
    where
        F: Fn(&DashboardEvent) + 'static,
    {
        self.dashboard_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_dashboard_event(&self, event: DashboardEvent) {
        for handler in &self.dashboard_handlers {
            handler(&event);
        }
    }
}

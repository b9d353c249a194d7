//! Legend slider: overflow detection, paging and press-and-hold repeat.

use crate::domain::logging::LogComponent;

/// Cadence of press-and-hold paging.
pub const REPEAT_INTERVAL_MS: u32 = 300;
/// Delay before overflow flags are re-read after a smooth scroll.
pub const SCROLL_SETTLE_MS: u32 = 400;
/// Opacity of legend items that are not the active one.
pub const DIMMED_OPACITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Arrow keys page the legend; everything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ScrollDirection::Left),
            "ArrowRight" => Some(ScrollDirection::Right),
            _ => None,
        }
    }
}

/// Scroll geometry of the legend's scrollable strip, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Whether content is hidden on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegendOverflow {
    pub left: bool,
    pub right: bool,
}

impl LegendOverflow {
    pub fn any(&self) -> bool {
        self.left || self.right
    }

    pub fn allows(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => self.left,
            ScrollDirection::Right => self.right,
        }
    }
}

impl ScrollMetrics {
    pub fn overflow(&self) -> LegendOverflow {
        LegendOverflow {
            left: self.scroll_left > 0.0,
            right: self.scroll_width - self.client_width > self.scroll_left,
        }
    }

    /// Target `scroll_left` one page away: the visible width minus the paging controls.
    pub fn page_target(&self, direction: ScrollDirection, controls_width: f64) -> f64 {
        let page = self.client_width - controls_width;
        match direction {
            ScrollDirection::Left => self.scroll_left - page,
            ScrollDirection::Right => self.scroll_left + page,
        }
    }
}

/// Legend item emphasis: full unless another item is the active legend.
pub fn item_opacity(active_legend: Option<&str>, name: &str) -> f64 {
    match active_legend {
        Some(active) if active != name => DIMMED_OPACITY,
        _ => 1.0,
    }
}

/// Source of repeating timers. Dropping a handle cancels its timer.
pub trait RepeatScheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Press-and-hold repeat as an owned resource.
///
/// The running timer lives in `active`; `stop`, `start` (replacing) and drop
/// all release it, so no exit path leaves an interval behind.
pub struct AutoRepeat<S: RepeatScheduler> {
    scheduler: S,
    period_ms: u32,
    active: Option<S::Handle>,
}

impl<S: RepeatScheduler> AutoRepeat<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, REPEAT_INTERVAL_MS)
    }

    pub fn with_period(scheduler: S, period_ms: u32) -> Self {
        Self { scheduler, period_ms, active: None }
    }

    /// Start repeating `tick` every period; the first call happens after one period.
    pub fn start(&mut self, tick: impl FnMut() + 'static) {
        self.active = None;
        self.active = Some(self.scheduler.every(self.period_ms, Box::new(tick)));
    }

    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            crate::log_trace!(LogComponent::Domain("AutoRepeat"), "repeat released");
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

/// Keyboard paging: page once on key-down, then repeat until key-up.
///
/// Key-repeat events of the key already held do not restart the timer.
pub struct KeyRepeat<S: RepeatScheduler> {
    held: Option<ScrollDirection>,
    repeat: AutoRepeat<S>,
}

impl<S: RepeatScheduler> KeyRepeat<S> {
    pub fn new(scheduler: S) -> Self {
        Self { held: None, repeat: AutoRepeat::new(scheduler) }
    }

    /// Returns `true` when the key press started a new hold.
    pub fn key_down(&mut self, direction: ScrollDirection, mut page: impl FnMut(ScrollDirection) + 'static) -> bool {
        if self.held == Some(direction) {
            return false;
        }
        self.held = Some(direction);
        page(direction);
        self.repeat.start(move || page(direction));
        true
    }

    /// Stops the repeat only when `direction` is the key being held.
    pub fn key_up(&mut self, direction: ScrollDirection) {
        if self.held == Some(direction) {
            self.release();
        }
    }

    pub fn release(&mut self) {
        self.held = None;
        self.repeat.stop();
    }

    pub fn held(&self) -> Option<ScrollDirection> {
        self.held
    }

    pub fn is_running(&self) -> bool {
        self.repeat.is_running()
    }
}

//! Repeat schedulers: gloo intervals in the browser, a virtual clock elsewhere.

use crate::domain::chart::RepeatScheduler;
use crate::domain::logging::LogComponent;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Browser scheduler; each handle is a live `setInterval`, cleared on drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl GlooScheduler {
    pub fn new() -> Self {
        Self
    }

    /// One-shot callback, cancelled if the returned `Timeout` is dropped first.
    pub fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

impl RepeatScheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        crate::log_trace!(LogComponent::Infrastructure("GlooScheduler"), "interval every {}ms", period_ms);
        Interval::new(period_ms, move || tick())
    }
}

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct ManualTask {
    id: u64,
    period: u64,
    next_due: u64,
    cancelled: Rc<Cell<bool>>,
    tick: Tick,
}

#[derive(Default)]
struct ManualClock {
    now: u64,
    next_id: u64,
    tasks: Vec<ManualTask>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Clones share one clock. Ticks run outside any internal borrow, so a tick
/// may start or cancel timers itself.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

/// Cancels its task when dropped.
pub struct ManualHandle {
    id: u64,
    cancelled: Rc<Cell<bool>>,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.tasks.retain(|task| task.id != self.id);
            }
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual milliseconds elapsed.
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Live timers.
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.iter().filter(|task| !task.cancelled.get()).count()
    }

    /// Move the clock forward, firing every tick that falls due, in time order.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        while let Some(tick) = self.next_due(target) {
            (tick.borrow_mut())();
        }
        let mut clock = self.clock.borrow_mut();
        clock.now = target;
        clock.tasks.retain(|task| !task.cancelled.get());
    }

    fn next_due(&self, target: u64) -> Option<Tick> {
        let mut clock = self.clock.borrow_mut();
        let (id, due) = clock
            .tasks
            .iter()
            .filter(|task| !task.cancelled.get() && task.next_due <= target)
            .map(|task| (task.id, task.next_due))
            .min_by_key(|&(id, due)| (due, id))?;
        clock.now = due;
        let task = clock.tasks.iter_mut().find(|task| task.id == id)?;
        task.next_due += task.period;
        Some(task.tick.clone())
    }
}

impl RepeatScheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let period = u64::from(period_ms.max(1));
        let cancelled = Rc::new(Cell::new(false));
        let next_due = clock.now + period;
        clock.tasks.push(ManualTask {
            id,
            period,
            next_due,
            cancelled: cancelled.clone(),
            tick: Rc::new(RefCell::new(tick)),
        });
        ManualHandle { id, cancelled, clock: Rc::downgrade(&self.clock) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_fire_on_period_boundaries() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let handle = scheduler.every(300, Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance(299);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
        scheduler.advance(600);
        assert_eq!(count.get(), 3);
        drop(handle);
        scheduler.advance(900);
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn tick_may_cancel_its_own_timer() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<ManualHandle>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));
        let (inner_slot, counter) = (slot.clone(), count.clone());
        let handle = scheduler.every(100, Box::new(move || {
            counter.set(counter.get() + 1);
            inner_slot.borrow_mut().take();
        }));
        *slot.borrow_mut() = Some(handle);
        scheduler.advance(1_000);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}

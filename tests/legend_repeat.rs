use crypto_dashboard_wasm::domain::chart::legend::{REPEAT_INTERVAL_MS, item_opacity};
use crypto_dashboard_wasm::domain::chart::{AutoRepeat, KeyRepeat, ScrollDirection, ScrollMetrics};
use crypto_dashboard_wasm::infrastructure::ManualScheduler;
use quickcheck_macros::quickcheck;
use std::cell::RefCell;
use std::rc::Rc;

type PageLog = Rc<RefCell<Vec<ScrollDirection>>>;

fn pager(log: &PageLog) -> impl FnMut(ScrollDirection) + Clone + 'static {
    let log = log.clone();
    move |direction| log.borrow_mut().push(direction)
}

/// Mouse-down on a scroll button: one page now, then repeat.
fn press(repeat: &mut AutoRepeat<ManualScheduler>, log: &PageLog, direction: ScrollDirection) {
    let mut page = pager(log);
    page(direction);
    repeat.start(move || page(direction));
}

#[test]
fn holding_for_900ms_pages_at_least_twice_more() {
    let scheduler = ManualScheduler::new();
    let mut repeat = AutoRepeat::new(scheduler.clone());
    let log = PageLog::default();

    press(&mut repeat, &log, ScrollDirection::Right);
    scheduler.advance(900);

    let extra = log.borrow().len() - 1;
    assert!(extra >= 2, "only {extra} repeats after 900ms");
    assert!(log.borrow().iter().all(|d| *d == ScrollDirection::Right));
}

#[test]
fn release_stops_within_one_tick() {
    let scheduler = ManualScheduler::new();
    let mut repeat = AutoRepeat::new(scheduler.clone());
    let log = PageLog::default();

    press(&mut repeat, &log, ScrollDirection::Left);
    scheduler.advance(650);
    repeat.stop();
    let at_release = log.borrow().len();

    scheduler.advance(u64::from(REPEAT_INTERVAL_MS) * 5);
    assert_eq!(log.borrow().len(), at_release);
    assert_eq!(scheduler.pending(), 0);
    assert!(!repeat.is_running());
}

#[test]
fn dropping_the_repeat_releases_its_timer() {
    let scheduler = ManualScheduler::new();
    let log = PageLog::default();
    {
        let mut repeat = AutoRepeat::new(scheduler.clone());
        press(&mut repeat, &log, ScrollDirection::Right);
        assert_eq!(scheduler.pending(), 1);
    }
    assert_eq!(scheduler.pending(), 0);
    scheduler.advance(1_000);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn restarting_replaces_the_previous_timer() {
    let scheduler = ManualScheduler::new();
    let mut repeat = AutoRepeat::new(scheduler.clone());
    let log = PageLog::default();

    press(&mut repeat, &log, ScrollDirection::Left);
    press(&mut repeat, &log, ScrollDirection::Right);
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(300);
    assert_eq!(log.borrow().last(), Some(&ScrollDirection::Right));
    assert_eq!(log.borrow().len(), 3);
}

#[quickcheck]
fn repeats_match_elapsed_periods(hold_ms: u16) -> bool {
    let scheduler = ManualScheduler::new();
    let mut repeat = AutoRepeat::new(scheduler.clone());
    let log = PageLog::default();

    press(&mut repeat, &log, ScrollDirection::Right);
    scheduler.advance(u64::from(hold_ms));
    repeat.stop();

    let expected = 1 + usize::from(hold_ms) / REPEAT_INTERVAL_MS as usize;
    log.borrow().len() == expected
}

#[test]
fn held_arrow_key_does_not_restart_paging() {
    let scheduler = ManualScheduler::new();
    let mut keys = KeyRepeat::new(scheduler.clone());
    let log = PageLog::default();

    assert!(keys.key_down(ScrollDirection::Right, pager(&log)));
    scheduler.advance(200);
    assert!(!keys.key_down(ScrollDirection::Right, pager(&log)));
    scheduler.advance(100);
    assert_eq!(log.borrow().len(), 2);

    keys.key_up(ScrollDirection::Right);
    assert_eq!(keys.held(), None);
    scheduler.advance(900);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn releasing_a_stale_arrow_keeps_the_current_hold() {
    let scheduler = ManualScheduler::new();
    let mut keys = KeyRepeat::new(scheduler.clone());
    let log = PageLog::default();

    keys.key_down(ScrollDirection::Left, pager(&log));
    keys.key_down(ScrollDirection::Right, pager(&log));
    keys.key_up(ScrollDirection::Left);
    assert_eq!(keys.held(), Some(ScrollDirection::Right));
    assert!(keys.is_running());

    scheduler.advance(u64::from(REPEAT_INTERVAL_MS));
    assert_eq!(*log.borrow(), [ScrollDirection::Left, ScrollDirection::Right, ScrollDirection::Right]);

    keys.key_up(ScrollDirection::Right);
    assert!(!keys.is_running());
}

#[test]
fn overflow_and_page_targets() {
    let start = ScrollMetrics { scroll_left: 0.0, scroll_width: 600.0, client_width: 200.0 };
    let overflow = start.overflow();
    assert!(!overflow.left && overflow.right);
    assert!(overflow.any());

    let end = ScrollMetrics { scroll_left: 400.0, ..start };
    let overflow = end.overflow();
    assert!(overflow.left && !overflow.right);

    let fits = ScrollMetrics { scroll_left: 0.0, scroll_width: 200.0, client_width: 200.0 };
    assert!(!fits.overflow().any());
}

#[test]
fn inactive_legend_items_are_dimmed() {
    assert_eq!(item_opacity(None, "a"), 1.0);
    assert_eq!(item_opacity(Some("a"), "a"), 1.0);
    assert!(item_opacity(Some("a"), "b") < 1.0);
}

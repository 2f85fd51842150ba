use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Trailing-edge debounce bookkeeping.
///
/// Every `call` replaces the pending value and hands out a ticket. Only the
/// ticket of the latest call redeems the value, so timers scheduled for
/// earlier calls of a burst deliver nothing and the burst yields its last
/// value exactly once.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn call(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}

/// What a throttled caller should do with the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    Run,
    /// Inside the cooldown: schedule one trailing run after this many ms.
    Defer(u32),
    /// Inside the cooldown with a trailing run already scheduled.
    Skip,
}

/// Throttle with a leading and a trailing edge: the first call of a window
/// runs, and the calls dropped inside it collapse into one run at its end.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_run: Option<f64>,
    trailing_scheduled: bool,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            last_run: None,
            trailing_scheduled: false,
        }
    }

    pub fn call(&mut self, now: f64) -> ThrottleDecision {
        match self.last_run {
            Some(last) if now - last < self.limit_ms => {
                if self.trailing_scheduled {
                    ThrottleDecision::Skip
                } else {
                    self.trailing_scheduled = true;
                    let wait = (self.limit_ms - (now - last)).clamp(0.0, self.limit_ms);
                    ThrottleDecision::Defer(wait.ceil() as u32)
                }
            }
            _ => {
                self.last_run = Some(now);
                self.trailing_scheduled = false;
                ThrottleDecision::Run
            }
        }
    }

    /// Records the deferred run scheduled by `Defer`.
    pub fn run_trailing(&mut self, now: f64) {
        self.last_run = Some(now);
        self.trailing_scheduled = false;
    }
}

struct DebounceSlot<T> {
    debouncer: Debouncer<T>,
    timer: Option<Timeout>,
}

/// Wraps `callback` so that bursts of emits collapse into one emit of the last
/// value, `wait_ms` after the burst ends.
#[hook]
pub fn use_debounced_callback<T>(wait_ms: u32, callback: Callback<T>) -> Callback<T>
where
    T: 'static,
{
    let slot = use_mut_ref(|| DebounceSlot {
        debouncer: Debouncer::default(),
        timer: None,
    });

    Callback::from(move |value: T| {
        let mut current = slot.borrow_mut();
        let ticket = current.debouncer.call(value);
        let weak = Rc::downgrade(&slot);
        let callback = callback.clone();
        // dropping the previous timeout cancels it
        current.timer = Some(Timeout::new(wait_ms, move || {
            let Some(slot) = weak.upgrade() else {
                return;
            };
            let value = slot.borrow_mut().debouncer.fire(ticket);
            if let Some(value) = value {
                callback.emit(value);
            }
        }));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn burst_fires_once_with_last_value() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.call("a");
        let second = debouncer.call("ab");
        let last = debouncer.call("abc");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(last), Some("abc"));
        assert_eq!(debouncer.fire(last), None);
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.call(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        let ticket = debouncer.call(2);
        assert_eq!(debouncer.fire(ticket), Some(2));
    }

    #[test]
    fn throttle_runs_leading_edge_then_one_trailing() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.call(0.0), ThrottleDecision::Run);
        assert_eq!(throttle.call(30.0), ThrottleDecision::Defer(70));
        assert_eq!(throttle.call(60.0), ThrottleDecision::Skip);
        assert_eq!(throttle.call(99.5), ThrottleDecision::Skip);

        throttle.run_trailing(100.0);
        assert_eq!(throttle.call(150.0), ThrottleDecision::Defer(50));
        throttle.run_trailing(200.0);
        assert_eq!(throttle.call(300.0), ThrottleDecision::Run);
    }

    #[test]
    fn last_event_of_a_burst_is_never_dropped() {
        // scroll back to the top inside the cooldown still gets a run
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.call(0.0), ThrottleDecision::Run);
        assert!(matches!(throttle.call(10.0), ThrottleDecision::Defer(40)));
    }

    proptest! {
        #[test]
        fn only_the_latest_ticket_redeems(count in 1usize..20, order in prop::collection::vec(0usize..20, 0..40)) {
            let mut debouncer = Debouncer::default();
            let tickets: Vec<u64> = (0..count).map(|i| debouncer.call(i)).collect();
            let mut fired = Vec::new();
            // timers of the burst may run in any order
            for i in order {
                if let Some(v) = debouncer.fire(tickets[i % count]) {
                    fired.push(v);
                }
            }
            if let Some(v) = debouncer.fire(tickets[count - 1]) {
                fired.push(v);
            }
            prop_assert_eq!(fired, vec![count - 1]);
        }
    }
}

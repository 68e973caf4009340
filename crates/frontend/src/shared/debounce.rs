//! Timer-reset debounce
//!
//! Each keystroke schedules a new timer and cancels the pending one; only the
//! timer that survives until it fires updates the debounced value.
//! Cancellation is drop-based: `gloo_timers::callback::Timeout` clears itself
//! when dropped, so replacing the pending handle is the cancel.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Holds at most one pending timer handle
pub struct Debouncer<H> {
    pending: Option<H>,
}

impl<H> Default for Debouncer<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Debouncer<H> {
    /// Replace the pending timer; the previous handle is dropped (cancelled)
    pub fn schedule(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Mirror `source` into a signal that only changes after `delay_ms` of inactivity
pub fn use_debounced(source: RwSignal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (debounced, set_debounced) = signal(source.get_untracked());
    // Timeout is !Send, keep it in local storage
    let debouncer = StoredValue::new_local(Debouncer::<Timeout>::default());

    Effect::new(move |_| {
        let value = source.get();
        let timeout = Timeout::new(delay_ms, move || {
            if debounced.get_untracked() != value {
                log::debug!("search filter applied: {:?}", value);
                set_debounced.set(value);
            }
        });
        debouncer.update_value(|d| d.schedule(timeout));
    });
    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
    });

    debounced
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records its id when dropped, standing in for a browser timer
    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn timer(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> FakeTimer {
        FakeTimer {
            id,
            cancelled: Rc::clone(log),
        }
    }

    #[test]
    fn test_each_schedule_cancels_previous() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::default();

        debouncer.schedule(timer(1, &cancelled));
        debouncer.schedule(timer(2, &cancelled));
        debouncer.schedule(timer(3, &cancelled));

        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert!(debouncer.pending.is_some());
    }

    #[test]
    fn test_cancel_drops_pending() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::default();

        debouncer.schedule(timer(7, &cancelled));
        debouncer.cancel();

        assert_eq!(*cancelled.borrow(), vec![7]);
        assert!(debouncer.pending.is_none());
    }

    #[test]
    fn test_nothing_cancelled_when_idle() {
        let mut debouncer: Debouncer<FakeTimer> = Debouncer::default();
        debouncer.cancel();
        assert!(debouncer.pending.is_none());
    }
}

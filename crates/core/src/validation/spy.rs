//! Invocation spy for validation hooks.
//!
//! Every validation entry point records itself here under a stable hook name, so
//! callers can assert how many validation passes an operation triggered. Counters are
//! thread-local: concurrently running tests each see only their own calls.

use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static CALLS: RefCell<HashMap<&'static str, usize>> = RefCell::new(HashMap::new());
}

/// Record one invocation of `hook` on the current thread.
pub fn record(hook: &'static str) {
    CALLS.with(|calls| *calls.borrow_mut().entry(hook).or_default() += 1);
    tracing::trace!(hook, "validation hook invoked");
}

/// Total invocations of `hook` on the current thread.
pub fn calls(hook: &str) -> usize {
    CALLS.with(|calls| calls.borrow().get(hook).copied().unwrap_or(0))
}

/// Snapshot of a hook's counter; reports invocations since it was taken.
#[derive(Debug, Clone, Copy)]
pub struct Spy {
    hook: &'static str,
    baseline: usize,
}

impl Spy {
    pub fn on(hook: &'static str) -> Self {
        Self {
            hook,
            baseline: calls(hook),
        }
    }

    pub fn calls(&self) -> usize {
        calls(self.hook) - self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spy_counts_from_its_snapshot() {
        record("test::hook");
        let spy = Spy::on("test::hook");
        assert_eq!(spy.calls(), 0);

        record("test::hook");
        record("test::hook");
        record("test::other");
        assert_eq!(spy.calls(), 2);
        assert_eq!(calls("test::hook"), 3);
    }

    #[test]
    fn counters_are_per_thread() {
        let spy = Spy::on("test::threaded");
        std::thread::spawn(|| record("test::threaded"))
            .join()
            .unwrap();
        assert_eq!(spy.calls(), 0);
    }
}

//! A wrapper that postpones its function until a quiet period elapses.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

/// Wraps `func` so it runs only after `wait` of quiescence.
pub fn debounce<F, A>(func: F, wait: Duration) -> Debounce<F, A> {
    Debounce::new(func, wait)
}

/// A callable that postpones its wrapped function until a quiet period
/// has elapsed since the most recent call.
///
/// Each [`call`](Debounce::call) replaces the pending scheduled run -
/// cancelling the previous one, a no-op when nothing is pending - and
/// schedules the function for `now + wait` with that call's arguments.
/// During a burst of calls closer together than `wait`, the function runs
/// at most once per quiet period: once, `wait` after the last call, with
/// the last call's arguments.
///
/// Time is driven by the caller: the pending run fires on the first
/// [`poll`](Debounce::poll) at or past its deadline. The wrapper owns no
/// thread and reads no clock of its own, so scheduling stays deterministic
/// under test.
pub struct Debounce<F, A> {
    func: F,
    wait: Duration,
    pending: Option<Pending<A>>,
}

/// The owned record of one scheduled run.
struct Pending<A> {
    deadline: Instant,
    args: A,
}

impl<F, A> Debounce<F, A> {
    /// Creates a wrapper around `func` with the given quiet period.
    #[must_use]
    pub const fn new(func: F, wait: Duration) -> Self {
        Self {
            func,
            wait,
            pending: None,
        }
    }

    /// Returns the configured quiet period.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Returns true while a scheduled run is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending run's deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Records an invocation at `now`, scheduling the wrapped function for
    /// `now + wait` with these arguments.
    ///
    /// Any previously pending run is cancelled by the replacement, so a
    /// burst of calls keeps pushing the deadline out and only the latest
    /// arguments survive.
    pub fn call(&mut self, args: A, now: Instant) {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            deadline: now + self.wait,
            args,
        });
        trace!(replaced, wait = ?self.wait, "debounce scheduled");
    }

    /// Fires the pending run if its deadline has passed by `now`.
    ///
    /// Consumes the pending record and yields the function's result, or
    /// `None` when nothing is due. Polling with nothing pending is a
    /// no-op.
    pub fn poll<R>(&mut self, now: Instant) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.deadline()? > now {
            return None;
        }
        let pending = self.pending.take()?;
        trace!("debounce fired");
        Some((self.func)(pending.args))
    }
}

impl<F, A> fmt::Debug for Debounce<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .field("deadline", &self.deadline())
            .finish_non_exhaustive()
    }
}

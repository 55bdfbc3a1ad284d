//! Trailing-edge debouncing of a changing value.

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Delay used by the search pages.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Emits a value only once it has stayed unchanged for `delay`.
///
/// Every [`push`](Debouncer::push) replaces the pending value and restarts the
/// timer, so at most one emission is scheduled at a time. Settled values come
/// out of the receiver returned by [`Debouncer::new`]. Dropping the debouncer
/// discards whatever is still pending.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    sender: UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded_channel();
        let debouncer = Self {
            delay,
            sender,
            pending: None,
        };
        (debouncer, receiver)
    }

    /// Schedules `value` for emission, cancelling the previously scheduled one.
    pub fn push(&mut self, value: T) {
        self.cancel();
        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            // The receiver is gone once the owning widget is torn down.
            let _ = sender.send(value);
        }));
    }

    /// Drops the scheduled emission, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Handle of a periodic task started with [`spawn_polling`].
///
/// The task stops at its next wake-up after [`PollHandle::cancel`].
#[derive(Debug, Clone, Default)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Holds at most one running poller. Putting a new handle in, or clearing
/// the slot, cancels the previous task.
#[derive(Debug, Clone, Default)]
pub struct PollerSlot {
    current: Arc<Mutex<Option<PollHandle>>>,
}

impl PollerSlot {
    pub fn replace(&self, next: Option<PollHandle>) {
        let Ok(mut current) = self.current.lock() else { return };
        if let Some(previous) = current.take() {
            previous.cancel();
        }
        *current = next;
    }

    pub fn stop(&self) {
        self.replace(None);
    }
}

/// Run `on_tick` every `interval_ms` until the handle is cancelled.
/// The first tick happens after one full interval.
pub fn spawn_polling<F>(interval_ms: u32, on_tick: F) -> PollHandle
where
    F: Fn() + 'static,
{
    let handle = PollHandle::default();
    let task_handle = handle.clone();

    spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(interval_ms).await;
            if task_handle.is_cancelled() {
                break;
            }
            on_tick();
        }
        log::debug!("Polling task stopped");
    });

    handle
}

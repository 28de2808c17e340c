//! Background network calls.
//!
//! A call runs on its own worker thread and always reports back exactly one
//! completion message, whether it returned, failed, was cancelled, panicked,
//! or the thread could not even be started. Controllers rely on that to tear
//! down the loading indicator.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::app::domain::{CallOutcome, Message, RequestId};
use crate::app::infrastructure::dispatch::Dispatch;
use crate::app::infrastructure::error::Result;

/// Sends the completion message when dropped unless one was already sent.
struct CompletionGuard<T, D, C>
where
    D: Dispatch,
    C: Fn(CallOutcome<T>) -> Message,
{
    dispatch: D,
    complete: C,
    delivered: bool,
    _result: PhantomData<fn(T)>,
}

impl<T, D, C> CompletionGuard<T, D, C>
where
    D: Dispatch,
    C: Fn(CallOutcome<T>) -> Message,
{
    fn deliver(&mut self, outcome: CallOutcome<T>) {
        self.delivered = true;
        self.dispatch.dispatch((self.complete)(outcome));
    }
}

impl<T, D, C> Drop for CompletionGuard<T, D, C>
where
    D: Dispatch,
    C: Fn(CallOutcome<T>) -> Message,
{
    fn drop(&mut self) {
        if !self.delivered {
            let outcome = CallOutcome::Failed("background call ended without a result".to_string());
            self.dispatch.dispatch((self.complete)(outcome));
        }
    }
}

/// A cancellable background call.
pub struct Task {
    id: RequestId,
    cancelled: Arc<AtomicBool>,
}

impl Task {
    /// Run `work` on a worker thread and report its result through
    /// `dispatch`, wrapped by `complete`.
    pub fn spawn<T, D, W, C>(id: RequestId, name: &str, dispatch: D, work: W, complete: C) -> Task
    where
        T: Send + 'static,
        D: Dispatch,
        W: FnOnce() -> Result<T> + Send + 'static,
        C: Fn(CallOutcome<T>) -> Message + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let mut guard = CompletionGuard {
            dispatch,
            complete,
            delivered: false,
            _result: PhantomData,
        };

        let spawned = thread::Builder::new()
            .name(format!("{}-{}", name, id.0))
            .spawn(move || {
                let result = work();
                let outcome = if flag.load(Ordering::Acquire) {
                    CallOutcome::Cancelled
                } else {
                    match result {
                        Ok(value) => CallOutcome::Completed(value),
                        Err(e) => CallOutcome::Failed(e.to_string()),
                    }
                };
                guard.deliver(outcome);
            });

        // On spawn failure the closure, and the guard inside it, is dropped,
        // which still posts a completion.
        if let Err(e) = spawned {
            tracing::error!(request = id.0, "failed to start worker thread: {}", e);
        }

        Task { id, cancelled }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Discard the call's result. The completion message still arrives,
    /// carrying `CallOutcome::Cancelled`.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// In-flight calls of one kind, with request id allocation.
#[derive(Default)]
pub struct TaskSet {
    next_id: u64,
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> RequestId {
        self.next_id += 1;
        RequestId(self.next_id)
    }

    pub fn track(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Forget a finished call. Returns false if it was unknown.
    pub fn finish(&mut self, id: RequestId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        self.tasks.len() != before
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn cancel_all(&self) {
        for task in &self.tasks {
            task.cancel();
        }
    }
}

use std::sync::mpsc;

use crate::app::domain::Message;

/// Posts messages back onto the UI thread's queue.
///
/// Background calls hold a clone of the dispatcher and report through it;
/// every state change still happens on the thread draining the queue.
pub trait Dispatch: Clone + Send + 'static {
    fn dispatch(&self, message: Message);
}

impl Dispatch for mpsc::Sender<Message> {
    fn dispatch(&self, message: Message) {
        // Receiver gone means the session is shutting down.
        if self.send(message).is_err() {
            tracing::debug!("dispatch queue closed, dropping message");
        }
    }
}

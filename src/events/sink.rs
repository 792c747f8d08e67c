use std::cell::RefCell;

use super::Event;

/// Receiver of overlay events.
pub trait EventSink {
    fn send(&self, event: Event);
}

/// Buffer drained by the application, handy where channels are not available (wasm).
impl EventSink for RefCell<Vec<Event>> {
    fn send(&self, event: Event) {
        self.borrow_mut().push(event);
    }
}

#[cfg(feature = "events")]
impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        if let Err(err) = crossbeam::channel::Sender::send(self, event) {
            log::warn!("zoom overlay: dropping event, receiver is gone: {err}");
        }
    }
}

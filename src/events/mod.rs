mod event;
mod sink;

pub use event::{Event, PayloadZoomRequest};
pub use sink::EventSink;

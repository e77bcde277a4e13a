use std::fmt;
use std::time::Duration;

use crate::document::NodeId;

/// Handle returned by [`Document::set_timeout`](crate::Document::set_timeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Handle returned by [`Document::add_event_listener`](crate::Document::add_event_listener).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Events queued by the document and drained by the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary button click. `target` is the deepest element hit.
    Click { target: NodeId },
    /// Viewport resized
    Resize { width: u16, height: u16 },
    /// A timer scheduled with `set_timeout` became due.
    Timer { timer: TimerId },
}

/// Payload of a custom event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDetail {
    pub target_entry: NodeId,
}

/// Named notification delivered synchronously to listeners on `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEvent {
    pub name: String,
    pub target: NodeId,
    pub detail: EventDetail,
    /// Document clock at dispatch.
    pub timestamp: Duration,
}

impl CustomEvent {
    pub fn new(name: impl Into<String>, target: NodeId, detail: EventDetail) -> Self {
        Self {
            name: name.into(),
            target,
            detail,
            timestamp: Duration::ZERO,
        }
    }
}

use std::time::Duration;

use super::{Document, NodeId};
use crate::error::DomError;
use crate::event::{CustomEvent, Event, ListenerId, TimerId};
use crate::layout;

pub(super) struct Listener {
    id: ListenerId,
    target: NodeId,
    name: String,
    callback: Box<dyn FnMut(&CustomEvent)>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct PendingTimer {
    id: TimerId,
    due: Duration,
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    pub(super) fn new(doc: &'a Document, start: Option<NodeId>) -> Self {
        Self { doc, next: start }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}

impl Document {
    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Queue a click on `target`.
    pub fn click(&mut self, target: NodeId) -> Result<(), DomError> {
        self.get(target)?;
        self.queue.push_back(Event::Click { target });
        Ok(())
    }

    /// Queue a click on whatever is rendered at (`x`, `y`).
    pub fn click_at(&mut self, x: u16, y: u16) -> Option<NodeId> {
        let result = layout::layout(self);
        let target = layout::hit_test(&result, self, x, y)?;
        self.queue.push_back(Event::Click { target });
        Some(target)
    }

    /// Change the viewport size and queue a resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.queue.push_back(Event::Resize { width, height });
    }

    /// Drain every queued event in arrival order.
    pub fn poll_events(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.queue.is_empty()
    }

    // -------------------------------------------------------------------------
    // Clock and timers
    // -------------------------------------------------------------------------

    /// Document clock: total time advanced since creation.
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Schedule a [`Event::Timer`] `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.timers.push(PendingTimer {
            id,
            due: self.clock + delay,
        });
        id
    }

    /// Returns true if the timer was still pending.
    pub fn clear_timeout(&mut self, timer: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|pending| pending.id != timer);
        self.timers.len() != before
    }

    /// Move the clock forward, queue due timers in due order and prune
    /// finished transitions.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        let now = self.clock;

        let mut due: Vec<PendingTimer> = Vec::new();
        self.timers.retain(|pending| {
            if pending.due <= now {
                due.push(*pending);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|pending| (pending.due, pending.id));
        self.queue
            .extend(due.into_iter().map(|pending| Event::Timer { timer: pending.id }));

        self.transitions
            .retain(|_, transition| !transition.is_finished(now));
    }

    // -------------------------------------------------------------------------
    // Custom events
    // -------------------------------------------------------------------------

    /// Register `callback` for custom events named `name` dispatched on
    /// `target`.
    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        name: &str,
        callback: impl FnMut(&CustomEvent) + 'static,
    ) -> Result<ListenerId, DomError> {
        self.get(target)?;
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener {
            id,
            target,
            name: name.to_string(),
            callback: Box::new(callback),
        });
        Ok(id)
    }

    pub fn remove_event_listener(&mut self, listener: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != listener);
        self.listeners.len() != before
    }

    /// Deliver `event` synchronously to the listeners on its target, in
    /// registration order. Returns the number of listeners invoked.
    pub fn dispatch_event(&mut self, mut event: CustomEvent) -> Result<usize, DomError> {
        self.get(event.target)?;
        event.timestamp = self.clock;

        let mut delivered = 0;
        for listener in self
            .listeners
            .iter_mut()
            .filter(|l| l.target == event.target && l.name == event.name)
        {
            (listener.callback)(&event);
            delivered += 1;
        }

        log::trace!(
            "dispatched '{}' on {} to {delivered} listener(s)",
            event.name,
            event.target
        );
        Ok(delivered)
    }
}

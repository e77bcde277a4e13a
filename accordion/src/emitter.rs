//! Custom events announced on the wrapper, and the diagnostic trace.

use std::fmt;

use pagedom::{CustomEvent, Document, EventDetail, NodeId, Selector};

use crate::error::AccordionError;

/// `log` target of every record written by this crate.
pub const LOG_TARGET: &str = "accordion";

/// Dispatched once per wrapper after initialization.
pub const INITIALIZED: &str = "accordion-initialized";
/// Dispatched when an entry opens.
pub const ENTRY_OPEN: &str = "accordion-entry-open";
/// Dispatched when an entry closes.
pub const ENTRY_CLOSE: &str = "accordion-entry-close";

/// Debug-gated trace sink. Observational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, "{args}");
        }
    }
}

/// Dispatches accordion events on the wrapper enclosing the acting element.
#[derive(Debug, Clone)]
pub struct Emitter {
    wrapper: Selector,
    diagnostics: Diagnostics,
}

impl Emitter {
    pub fn new(wrapper: Selector, diagnostics: Diagnostics) -> Self {
        Self {
            wrapper,
            diagnostics,
        }
    }

    /// Dispatch `name` on the nearest wrapper of `element` with `element`
    /// as the payload. Never fails: a missing element or wrapper is logged
    /// and nothing is dispatched. Returns the wrapper on success.
    pub fn emit(&self, doc: &mut Document, element: Option<NodeId>, name: &str) -> Option<NodeId> {
        let Some(element) = element else {
            log::warn!(target: LOG_TARGET, "emit '{name}': element is null");
            return None;
        };

        match self.try_emit(doc, element, name) {
            Ok(wrapper) => Some(wrapper),
            Err(e) => {
                log::warn!(target: LOG_TARGET, "emit '{name}': {e}");
                None
            }
        }
    }

    fn try_emit(&self, doc: &mut Document, element: NodeId, name: &str) -> Result<NodeId, AccordionError> {
        let wrapper = doc
            .closest(element, &self.wrapper)
            .ok_or(AccordionError::MissingWrapper { element })?;

        let event = CustomEvent::new(
            name,
            wrapper,
            EventDetail {
                target_entry: element,
            },
        );
        let delivered = doc.dispatch_event(event)?;

        self.diagnostics.trace(format_args!(
            "'{name}' on {wrapper} for {element}, {delivered} listener(s)"
        ));
        Ok(wrapper)
    }
}

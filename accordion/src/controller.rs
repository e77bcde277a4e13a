//! Click handling and the state -> class projection.

use pagedom::{Document, NodeId};

use crate::emitter::LOG_TARGET;
use crate::error::AccordionError;
use crate::state::EntryState;
use crate::widget::Accordion;

impl Accordion {
    /// Record every `.wrapper .header` as clickable. Headers mounted later
    /// stay inert until a new accordion is initialized.
    pub(crate) fn bind_headers(&mut self, doc: &Document) {
        let headers = doc.query_selector_all(doc.root(), &self.selectors().wrapper_header);
        self.diagnostics().trace(format_args!(
            "header selector '{}' bound {} header(s)",
            self.selectors().wrapper_header,
            headers.len()
        ));
        for (index, header) in headers.iter().enumerate() {
            self.diagnostics()
                .trace(format_args!("found header {header} ({index})"));
        }
        self.headers = headers;
    }

    pub(crate) fn handle_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        let Some(header) = doc.closest(target, &self.selectors().header) else {
            return false;
        };
        if !self.headers.contains(&header) {
            return false;
        }

        self.diagnostics()
            .trace(format_args!("header {header} clicked (target {target})"));

        match self.toggle(doc, header) {
            Ok(_) => true,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "click on {header}: {e}");
                false
            }
        }
    }

    /// Toggle the entry owning `header`, exactly as a click on it would.
    /// Returns the entry's new state.
    pub fn toggle(&mut self, doc: &mut Document, header: NodeId) -> Result<EntryState, AccordionError> {
        let entry = doc
            .parent(header)
            .and_then(|parent| doc.closest(parent, &self.selectors().entry))
            .ok_or(AccordionError::MissingEntry { element: header })?;

        if self.options().only_one_open {
            self.close_others(doc, entry);
        }

        let next = self.states.get(entry).toggled();
        self.states.set(entry, next);
        self.render_classes(doc)?;

        self.emitter().emit(doc, Some(header), next.event_name());
        self.apply_heights(doc)?;

        Ok(next)
    }

    /// Close every open entry sharing `entry`'s wrapper, except `entry`.
    fn close_others(&mut self, doc: &Document, entry: NodeId) {
        let wrapper_of = |id: NodeId| doc.closest(id, &self.selectors().wrapper);
        let Some(wrapper) = wrapper_of(entry) else {
            return;
        };

        let others: Vec<NodeId> = self
            .states
            .open()
            .filter(|&open| open != entry && wrapper_of(open) == Some(wrapper))
            .collect();

        for other in others {
            self.diagnostics()
                .trace(format_args!("only_one_open: closing {other}"));
            self.states.set(other, EntryState::Closed);
        }
    }

    /// Write every tracked entry's state onto the document: the open marker
    /// on the entry and the highlight on its header.
    pub(crate) fn render_classes(&self, doc: &mut Document) -> Result<(), AccordionError> {
        let options = self.options();

        for (entry, state) in self.states.iter() {
            let open = state.is_open();
            doc.toggle_class(entry, &options.open_class, open)?;

            if let Some(header) = doc.query_selector(entry, &self.selectors().header) {
                doc.toggle_class(header, &options.active_header_class, open)?;
            }
        }

        Ok(())
    }
}

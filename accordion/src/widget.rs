use std::collections::{HashMap, HashSet};

use pagedom::{Document, Event, NodeId, TimerId};
use serde_json::Value;

use crate::emitter::{Diagnostics, Emitter, INITIALIZED, LOG_TARGET};
use crate::error::AccordionError;
use crate::options::{AccordionOptions, Selectors};
use crate::registration;
use crate::state::{EntryState, EntryStates};

/// Collapsible-list behaviour for every wrapper of a document.
///
/// The widget never owns the document: the host keeps it, pulls events with
/// [`Document::poll_events`] and hands each one to
/// [`Accordion::handle_event`].
///
/// ```
/// use accordion::{Accordion, AccordionOptions};
/// use pagedom::{Document, Element};
///
/// let mut doc = Document::new(40, 20);
/// doc.mount(
///     Element::div().class("le-accordion").child(
///         Element::div()
///             .class("le-acc-entry")
///             .child(Element::div().class("le-acc-header").text("Title"))
///             .child(Element::div().class("le-acc-content").text("Body")),
///     ),
/// );
///
/// let mut accordion = Accordion::new(AccordionOptions::default());
/// accordion.init(&mut doc).unwrap();
/// assert_eq!(accordion.headers().len(), 1);
/// ```
#[derive(Debug)]
pub struct Accordion {
    options: AccordionOptions,
    selectors: Selectors,
    diagnostics: Diagnostics,
    emitter: Emitter,
    pub(crate) states: EntryStates,
    pub(crate) headers: Vec<NodeId>,
    pending_initialized: HashMap<TimerId, NodeId>,
    initialized: bool,
}

impl Accordion {
    pub fn new(options: AccordionOptions) -> Self {
        registration::definition();

        let selectors = options.selectors();
        let diagnostics = Diagnostics::new(options.debug);
        let emitter = Emitter::new(selectors.wrapper.clone(), diagnostics);

        diagnostics.trace(format_args!(
            "new accordion: wrapper '{}', header '{}', only_one_open {}",
            selectors.wrapper, selectors.wrapper_header, options.only_one_open
        ));

        Self {
            options,
            selectors,
            diagnostics,
            emitter,
            states: EntryStates::new(),
            headers: Vec::new(),
            pending_initialized: HashMap::new(),
            initialized: false,
        }
    }

    /// Construct from a JSON configuration value, see
    /// [`AccordionOptions::resolve`].
    pub fn from_value(value: &Value) -> Self {
        Self::new(AccordionOptions::resolve(Some(value)))
    }

    pub fn options(&self) -> &AccordionOptions {
        &self.options
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    pub(crate) fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Headers that received click handling during [`init`](Self::init).
    pub fn headers(&self) -> &[NodeId] {
        &self.headers
    }

    /// State of `entry`. Unknown entries are closed.
    pub fn state(&self, entry: NodeId) -> EntryState {
        self.states.get(entry)
    }

    /// Every tracked entry, in document order.
    pub fn entries(&self) -> Vec<NodeId> {
        self.states.iter().map(|(id, _)| id).collect()
    }

    pub fn open_entries(&self) -> Vec<NodeId> {
        self.states.open().collect()
    }

    /// Measure every entry, bind the headers, apply heights and announce
    /// each wrapper. Must run once, after the markup is mounted.
    pub fn init(&mut self, doc: &mut Document) -> Result<(), AccordionError> {
        if self.initialized {
            log::warn!(target: LOG_TARGET, "init called twice, ignoring");
            return Err(AccordionError::AlreadyInitialized);
        }
        self.diagnostics.trace(format_args!("init()"));

        let root = doc.root();
        let wrappers = doc.query_selector_all(root, &self.selectors.wrapper);

        // Wrappers that already hold an open entry, for single-open seeding
        let mut holding_open = HashSet::new();
        for entry in doc.query_selector_all(root, &self.selectors.wrapper_entry) {
            let mut state = if doc.has_class(entry, &self.options.open_class) {
                EntryState::Open
            } else {
                EntryState::Closed
            };
            if state.is_open() && self.options.only_one_open {
                let wrapper = doc.closest(entry, &self.selectors.wrapper);
                if !holding_open.insert(wrapper) {
                    self.diagnostics
                        .trace(format_args!("{entry} starts closed, its wrapper already has an open entry"));
                    state = EntryState::Closed;
                }
            }
            self.states.set(entry, state);
        }

        for header in doc.query_selector_all(root, &self.selectors.wrapper_header) {
            doc.add_class(header, &self.options.initialized_class)?;
        }

        self.calculate_heights(doc);
        self.bind_headers(doc);
        self.render_classes(doc)?;
        self.apply_heights(doc)?;
        self.initialized = true;

        let delay = self.options.initialized_delay_duration();
        for wrapper in wrappers {
            self.emitter.emit(doc, Some(wrapper), INITIALIZED);
            let timer = doc.set_timeout(delay);
            self.pending_initialized.insert(timer, wrapper);
        }

        Ok(())
    }

    /// React to one document event. Returns true when the event belonged to
    /// this accordion. Failures are logged, never returned.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> bool {
        if !self.initialized {
            return false;
        }

        match event {
            Event::Click { target } => self.handle_click(doc, *target),
            Event::Resize { width, height } => {
                self.diagnostics
                    .trace(format_args!("resize to {width}x{height}"));
                self.recalculate(doc);
                true
            }
            Event::Timer { timer } => {
                let Some(wrapper) = self.pending_initialized.remove(timer) else {
                    return false;
                };
                if let Err(e) = doc.add_class(wrapper, &self.options.initialized_class) {
                    log::warn!(target: LOG_TARGET, "marking {wrapper} initialized: {e}");
                }
                self.diagnostics
                    .trace(format_args!("{wrapper} visually initialized"));
                true
            }
        }
    }
}

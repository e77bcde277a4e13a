#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use accordion::{Accordion, AccordionOptions};
use pagedom::{CustomEvent, Document, Element, NodeId, Selector};

pub const WIDTH: u16 = 40;
pub const HEIGHT: u16 = 20;

pub fn entry(title: &str, body: &str) -> Element {
    Element::div()
        .class("le-acc-entry")
        .child(Element::div().class("le-acc-header").text(title))
        .child(Element::div().class("le-acc-content").text(body))
}

/// Three entries: A (content 2 lines), B (3 lines), C (1 line).
pub fn three_entries() -> Element {
    Element::div().class("le-accordion").children([
        entry("Title A", "a1\na2"),
        entry("Title B", "b1\nb2\nb3"),
        entry("Title C", "c1"),
    ])
}

pub struct Fixture {
    pub doc: Document,
    pub accordion: Accordion,
    pub wrapper: NodeId,
    pub entries: Vec<NodeId>,
    pub headers: Vec<NodeId>,
}

impl Fixture {
    /// Mount `markup` and initialize an accordion over it.
    pub fn new(markup: Element, options: AccordionOptions) -> Self {
        let mut doc = Document::new(WIDTH, HEIGHT);
        let wrapper = doc.mount(markup);
        let mut accordion = Accordion::new(options);
        accordion.init(&mut doc).expect("init");

        let entries = select(&doc, ".le-acc-entry");
        let headers = select(&doc, ".le-acc-header");

        Self {
            doc,
            accordion,
            wrapper,
            entries,
            headers,
        }
    }

    pub fn standard(options: AccordionOptions) -> Self {
        Self::new(three_entries(), options)
    }

    /// Click `target` and let the accordion handle everything queued.
    pub fn click(&mut self, target: NodeId) {
        self.doc.click(target).expect("click");
        self.pump();
    }

    pub fn pump(&mut self) {
        for event in self.doc.poll_events() {
            self.accordion.handle_event(&mut self.doc, &event);
        }
    }

    pub fn attr(&self, entry: NodeId, name: &str) -> Option<String> {
        self.doc.attribute(entry, name).map(str::to_string)
    }

    pub fn min_attr(&self, entry: NodeId) -> Option<String> {
        self.attr(entry, "data-le-acc-min-height")
    }

    pub fn max_attr(&self, entry: NodeId) -> Option<String> {
        self.attr(entry, "data-le-acc-max-height")
    }

    pub fn is_open(&self, entry: NodeId) -> bool {
        self.doc.has_class(entry, "-open")
    }
}

pub fn select(doc: &Document, selector: &str) -> Vec<NodeId> {
    let selector = Selector::parse(selector).expect("selector");
    doc.query_selector_all(doc.root(), &selector)
}

/// Record every `name` event dispatched on `target`.
pub fn capture(doc: &mut Document, target: NodeId, name: &str) -> Rc<RefCell<Vec<CustomEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    doc.add_event_listener(target, name, move |event| sink.borrow_mut().push(event.clone()))
        .expect("listener");
    seen
}

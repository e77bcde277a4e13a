mod common;

use std::time::Duration;

use accordion::emitter::Emitter;
use accordion::{
    define, registered_widgets, Accordion, AccordionError, AccordionOptions, Diagnostics,
    INITIALIZED,
};
use common::{capture, entry, select, three_entries, Fixture, HEIGHT, WIDTH};
use pagedom::{Document, Element, Event, Selector};
use serde_json::json;

fn mounted(markup: Element) -> (Document, pagedom::NodeId) {
    let mut doc = Document::new(WIDTH, HEIGHT);
    let wrapper = doc.mount(markup);
    (doc, wrapper)
}

fn pump(doc: &mut Document, accordion: &mut Accordion) {
    for event in doc.poll_events() {
        accordion.handle_event(doc, &event);
    }
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initialized_event_precedes_visual_class() {
    let (mut doc, wrapper) = mounted(three_entries());
    let seen = capture(&mut doc, wrapper, INITIALIZED);
    let mut accordion = Accordion::new(AccordionOptions::default());

    accordion.init(&mut doc).expect("init");

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].detail.target_entry, wrapper);
    assert!(!doc.has_class(wrapper, "-initialized"));

    doc.advance(Duration::from_millis(249));
    pump(&mut doc, &mut accordion);
    assert!(!doc.has_class(wrapper, "-initialized"));

    doc.advance(Duration::from_millis(1));
    pump(&mut doc, &mut accordion);
    assert!(doc.has_class(wrapper, "-initialized"));
    assert_eq!(seen.borrow().len(), 1, "announced once");
}

#[test]
fn test_custom_initialized_delay() {
    let (mut doc, wrapper) = mounted(three_entries());
    let options = AccordionOptions::default().initialized_delay(Duration::from_millis(10));
    let mut accordion = Accordion::new(options);
    accordion.init(&mut doc).expect("init");

    doc.advance(Duration::from_millis(10));
    pump(&mut doc, &mut accordion);

    assert!(doc.has_class(wrapper, "-initialized"));
}

#[test]
fn test_headers_marked_initialized_immediately() {
    let fx = Fixture::standard(AccordionOptions::default());

    for &header in &fx.headers {
        assert!(fx.doc.has_class(header, "-initialized"));
    }
    assert!(fx.accordion.is_initialized());
    assert_eq!(fx.accordion.entries(), fx.entries);
}

#[test]
fn test_initialized_event_per_wrapper() {
    let mut doc = Document::new(WIDTH, HEIGHT);
    let first = doc.mount(three_entries());
    let second = doc.mount(Element::div().class("le-accordion").child(entry("X", "x")));
    let first_seen = capture(&mut doc, first, INITIALIZED);
    let second_seen = capture(&mut doc, second, INITIALIZED);

    let mut accordion = Accordion::new(AccordionOptions::default());
    accordion.init(&mut doc).expect("init");

    assert_eq!(first_seen.borrow().len(), 1);
    assert_eq!(second_seen.borrow().len(), 1);
    assert_eq!(second_seen.borrow()[0].target, second);

    doc.advance(Duration::from_millis(250));
    pump(&mut doc, &mut accordion);
    assert!(doc.has_class(first, "-initialized"));
    assert!(doc.has_class(second, "-initialized"));
}

#[test]
fn test_init_twice_is_rejected() {
    let (mut doc, wrapper) = mounted(three_entries());
    let seen = capture(&mut doc, wrapper, INITIALIZED);
    let mut accordion = Accordion::new(AccordionOptions::default());

    accordion.init(&mut doc).expect("init");
    let second = accordion.init(&mut doc);

    assert_eq!(second, Err(AccordionError::AlreadyInitialized));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_events_before_init_are_ignored() {
    let (mut doc, _) = mounted(three_entries());
    let mut accordion = Accordion::new(AccordionOptions::default());
    let header = select(&doc, ".le-acc-header")[0];

    let handled = accordion.handle_event(&mut doc, &Event::Click { target: header });

    assert!(!handled);
    assert!(!doc.has_class(doc.parent(header).expect("entry"), "-open"));
    assert!(accordion.headers().is_empty());
}

#[test]
fn test_document_without_wrappers() {
    let (mut doc, _) = mounted(Element::div().child(Element::paragraph("plain page")));
    let mut accordion = Accordion::new(AccordionOptions::default());

    accordion.init(&mut doc).expect("init");

    assert!(accordion.entries().is_empty());
    assert!(accordion.headers().is_empty());
}

#[test]
fn test_debug_mode_does_not_change_behaviour() {
    let mut quiet = Fixture::standard(AccordionOptions::default());
    let mut loud = Fixture::standard(AccordionOptions::default().debug(true));

    for fx in [&mut quiet, &mut loud] {
        let (second, third) = (fx.headers[1], fx.headers[2]);
        fx.click(second);
        fx.click(third);
    }

    for (&q, &l) in quiet.entries.iter().zip(&loud.entries) {
        assert_eq!(quiet.is_open(q), loud.is_open(l));
        assert_eq!(quiet.doc.max_height(q), loud.doc.max_height(l));
        assert_eq!(quiet.max_attr(q), loud.max_attr(l));
    }
}

#[test]
fn test_from_value_configures_classes() {
    let markup = Element::div().class("faq").child(
        Element::div()
            .class("item")
            .child(Element::div().class("question").text("Why?"))
            .child(Element::div().class("answer").text("Because.")),
    );
    let (mut doc, wrapper) = mounted(markup);
    let mut accordion = Accordion::from_value(&json!({
        "wrapper_class": "faq",
        "entry_class": "item",
        "header_class": "question",
        "content_class": "answer",
        "open_class": "expanded",
    }));
    accordion.init(&mut doc).expect("init");

    let item = doc.children(wrapper)[0];
    let question = doc.children(item)[0];
    assert_eq!(doc.attribute(item, "data-le-acc-max-height"), Some("2"));

    doc.click(question).expect("click");
    pump(&mut doc, &mut accordion);

    assert!(doc.has_class(item, "expanded"));
    assert!(!doc.has_class(item, "-open"));
}

// ============================================================================
// Emitter
// ============================================================================

#[test]
fn test_emit_without_element_dispatches_nothing() {
    let (mut doc, wrapper) = mounted(three_entries());
    let seen = capture(&mut doc, wrapper, "custom");
    let emitter = Emitter::new(Selector::class("le-accordion"), Diagnostics::new(true));

    assert_eq!(emitter.emit(&mut doc, None, "custom"), None);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_emit_outside_wrapper_dispatches_nothing() {
    let mut doc = Document::new(WIDTH, HEIGHT);
    let loose = doc.mount(Element::div().text("loose"));
    let emitter = Emitter::new(Selector::class("le-accordion"), Diagnostics::default());

    assert_eq!(emitter.emit(&mut doc, Some(loose), "custom"), None);
}

#[test]
fn test_emit_finds_nearest_wrapper() {
    let (mut doc, wrapper) = mounted(three_entries());
    let seen = capture(&mut doc, wrapper, "custom");
    let emitter = Emitter::new(Selector::class("le-accordion"), Diagnostics::default());
    let content = select(&doc, ".le-acc-content")[1];

    doc.advance(Duration::from_millis(40));
    assert_eq!(emitter.emit(&mut doc, Some(content), "custom"), Some(wrapper));

    let events = seen.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].detail.target_entry, content);
    assert_eq!(events[0].timestamp, Duration::from_millis(40));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_define_runs_once() {
    assert!(define());
    assert!(!define());
    assert!(!define());
}

#[test]
fn test_accordion_is_registered() {
    let registration = registered_widgets()
        .find(|registration| registration.name == "accordion")
        .expect("registered");
    assert_eq!(registration.version, env!("CARGO_PKG_VERSION"));
}

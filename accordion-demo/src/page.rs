//! Sample page: markup and stylesheet built from the configured class names.

use std::time::Duration;

use accordion::AccordionOptions;
use pagedom::{
    Easing, Edges, Element, Rgb, Selector, StyleRule, Stylesheet, TextStyle, TransitionConfig,
};

const ENTRIES: &[(&str, &str)] = &[
    (
        "What is this?",
        "A collapsible list. Each header toggles the content below it, and the \
         entry's height animates between two measured values.",
    ),
    (
        "How are heights measured?",
        "At startup every entry stores its collapsed height (header only) and its \
         expanded height (header plus content) as data attributes.\n\
         Resizing the terminal measures everything again.",
    ),
    (
        "Can several entries be open?",
        "Yes, unless the demo runs with --only-one-open. Then opening one entry \
         closes the others in the same accordion.",
    ),
    (
        "Where do events go?",
        "Open and close events are dispatched on the wrapper. The status line \
         below shows the last one.",
    ),
];

/// Class of the status line the host loop writes into.
pub const STATUS_CLASS: &str = "demo-status";

pub fn markup(options: &AccordionOptions) -> Element {
    let entries = ENTRIES.iter().enumerate().map(|(index, (title, body))| {
        let entry = Element::div()
            .class(options.entry_class.as_str())
            .child(
                Element::div()
                    .class(options.header_class.as_str())
                    .text(*title),
            )
            .child(
                Element::div()
                    .class(options.content_class.as_str())
                    .padding(Edges::new(0, 2, 1, 2))
                    .text(*body),
            );
        // Second entry starts open
        if index == 1 {
            entry.class(options.open_class.as_str())
        } else {
            entry
        }
    });

    Element::section()
        .class("demo-page")
        .padding(Edges::new(1, 2, 1, 2))
        .child(Element::paragraph("Accordion demo").class("demo-title"))
        .child(
            Element::paragraph("click a header · r toggles reduced motion · q quits")
                .class("demo-hint"),
        )
        .child(Element::div().text(""))
        .child(Element::div().class(options.wrapper_class.as_str()).children(entries))
        .child(Element::div().text(""))
        .child(Element::paragraph("waiting for init").class(STATUS_CLASS))
}

pub fn stylesheet(options: &AccordionOptions) -> Stylesheet {
    let wrapper = || Selector::class(options.wrapper_class.as_str());
    let entry = || Selector::class(options.entry_class.as_str());
    let header = || Selector::class(options.header_class.as_str());

    Stylesheet::new()
        .rule(
            StyleRule::new(Selector::class("demo-title"))
                .text_style(TextStyle::new().bold())
                .fg(Rgb::new(170, 200, 255)),
        )
        .rule(StyleRule::new(Selector::class("demo-hint")).fg(Rgb::new(130, 130, 140)))
        .rule(
            StyleRule::new(Selector::class(STATUS_CLASS))
                .text_style(TextStyle::new().italic())
                .fg(Rgb::new(150, 220, 150)),
        )
        .rule(
            StyleRule::new(header())
                .before("▶ ")
                .text_style(TextStyle::new().bold()),
        )
        .rule(
            StyleRule::new(entry().and_class(options.open_class.as_str()).descendant(header()))
                .before("▼ "),
        )
        .rule(
            StyleRule::new(Selector::class(options.active_header_class.as_str()))
                .bg(Rgb::new(40, 70, 130)),
        )
        .rule(
            StyleRule::new(Selector::class(options.content_class.as_str()))
                .fg(Rgb::new(200, 200, 200)),
        )
        .rule(
            StyleRule::new(
                wrapper()
                    .and_class(options.initialized_class.as_str())
                    .descendant(entry()),
            )
            .max_height_transition(TransitionConfig::new(
                Duration::from_millis(200),
                Easing::EaseInOut,
            )),
        )
}

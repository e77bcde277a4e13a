use pagedom::layout::{layout, natural_height};
use pagedom::{hit_test, Buffer, Document, Edges, Element, Rect, Rgb, Selector, StyleRule, Stylesheet};

fn entry(title: &str, body: &str) -> Element {
    Element::div()
        .class("entry")
        .child(Element::div().class("header").text(title))
        .child(Element::div().class("content").text(body))
}

// ============================================================================
// Measurement
// ============================================================================

#[test]
fn test_text_lines_stack() {
    let mut doc = Document::new(40, 20);
    let id = doc.mount(Element::div().text("one\ntwo\nthree"));
    assert_eq!(doc.offset_height(id), 3);
}

#[test]
fn test_empty_element_has_no_height() {
    let mut doc = Document::new(40, 20);
    let id = doc.mount(Element::div());
    assert_eq!(doc.offset_height(id), 0);
}

#[test]
fn test_children_stack_under_own_text() {
    let mut doc = Document::new(40, 20);
    let id = doc.mount(
        Element::div()
            .text("title")
            .child(Element::paragraph("a"))
            .child(Element::paragraph("b\nc")),
    );
    assert_eq!(doc.offset_height(id), 4);
}

#[test]
fn test_padding_adds_height_and_narrows_width() {
    let mut doc = Document::new(10, 20);
    let outer = doc.mount(
        Element::div()
            .padding(Edges::new(1, 2, 1, 2))
            .child(Element::paragraph("aaaa bbbb")),
    );
    let inner = doc.children(outer)[0];

    // 10 columns minus 4 of padding leaves 6: "aaaa" / "bbbb"
    assert_eq!(doc.offset_height(inner), 2);
    assert_eq!(doc.offset_height(outer), 4);
}

#[test]
fn test_text_wraps_at_viewport_width() {
    let mut doc = Document::new(11, 20);
    let id = doc.mount(Element::div().text("hello world foo bar"));
    assert_eq!(doc.offset_height(id), 2);

    doc.resize(40, 20);
    assert_eq!(doc.offset_height(id), 1);
    assert_eq!(natural_height(&doc, id, 5), 4);
}

#[test]
fn test_max_height_clamps_offset_height() {
    let mut doc = Document::new(40, 20);
    let id = doc.mount(entry("Title", "a\nb\nc"));

    assert_eq!(doc.offset_height(id), 4);

    doc.set_max_height(id, Some(1)).expect("set");
    assert_eq!(doc.offset_height(id), 1);
    assert_eq!(doc.applied_max_height(id), Some(1));

    // A generous max-height never grows the element
    doc.set_max_height(id, Some(10)).expect("set");
    assert_eq!(doc.offset_height(id), 4);

    doc.set_max_height(id, None).expect("clear");
    assert_eq!(doc.max_height(id), None);
    assert_eq!(doc.offset_height(id), 4);
}

#[test]
fn test_clamped_child_shortens_parent() {
    let mut doc = Document::new(40, 20);
    let wrapper = doc.mount(Element::div().children([entry("A", "a\na"), entry("B", "b")]));
    let first = doc.children(wrapper)[0];

    assert_eq!(doc.offset_height(wrapper), 5);
    doc.set_max_height(first, Some(1)).expect("set");
    assert_eq!(doc.offset_height(wrapper), 3);
}

#[test]
fn test_stylesheet_before_counts_as_text() {
    let mut doc = Document::new(6, 20);
    let id = doc.mount(Element::div().class("header").text("Title"));
    assert_eq!(doc.offset_height(id), 1);

    doc.set_stylesheet(
        Stylesheet::new().rule(StyleRule::new(Selector::class("header")).before("> ")),
    );
    // "> Title" is seven columns wide
    assert_eq!(doc.offset_height(id), 2);
}

// ============================================================================
// Layout and hit testing
// ============================================================================

#[test]
fn test_layout_positions_blocks() {
    let mut doc = Document::new(40, 20);
    let wrapper = doc.mount(Element::div().children([entry("A", "a"), entry("B", "b")]));
    let [first, second] = doc.children(wrapper)[..] else {
        panic!("two entries");
    };

    let result = layout(&doc);

    assert_eq!(result.get(wrapper), Some(Rect::new(0, 0, 40, 4)));
    assert_eq!(result.get(first), Some(Rect::new(0, 0, 40, 2)));
    assert_eq!(result.get(second), Some(Rect::new(0, 2, 40, 2)));
    assert_eq!(result.iter().next().map(|(id, _)| id), Some(doc.root()));
}

#[test]
fn test_layout_padding_offsets_children() {
    let mut doc = Document::new(20, 10);
    let outer = doc.mount(
        Element::div()
            .padding(Edges::new(1, 0, 0, 3))
            .child(Element::paragraph("x")),
    );
    let inner = doc.children(outer)[0];

    let result = layout(&doc);
    assert_eq!(result.get(inner), Some(Rect::new(3, 1, 17, 1)));
}

#[test]
fn test_hit_test_deepest_element() {
    let mut doc = Document::new(40, 20);
    let wrapper = doc.mount(Element::div().children([entry("A", "a"), entry("B", "b")]));
    let second = doc.children(wrapper)[1];
    let second_header = doc.children(second)[0];
    let second_content = doc.children(second)[1];

    let result = layout(&doc);

    assert_eq!(hit_test(&result, &doc, 3, 2), Some(second_header));
    assert_eq!(hit_test(&result, &doc, 39, 3), Some(second_content));
    // Below the content the body has no height left
    assert_eq!(hit_test(&result, &doc, 0, 5), None);
    assert_eq!(hit_test(&result, &doc, 40, 0), None);
}

#[test]
fn test_hit_test_skips_clipped_content() {
    let mut doc = Document::new(40, 20);
    let wrapper = doc.mount(Element::div().children([entry("A", "a\na"), entry("B", "b")]));
    let [first, second] = doc.children(wrapper)[..] else {
        panic!("two entries");
    };
    doc.set_max_height(first, Some(1)).expect("set");

    let result = layout(&doc);
    let first_content = doc.children(first)[1];

    // The first content is laid out under its header but hidden
    assert_eq!(result.get(first_content).map(|r| r.y), Some(1));
    assert!(result.visible(first_content).is_some_and(|v| !v.contains(0, 1)));
    // Row 1 belongs to the second entry now
    assert_eq!(hit_test(&result, &doc, 0, 1), Some(doc.children(second)[0]));
}

#[test]
fn test_click_at_queues_click_on_hit() {
    let mut doc = Document::new(40, 20);
    let header = doc.mount(Element::div().text("click me"));

    assert_eq!(doc.click_at(2, 0), Some(header));
    assert_eq!(doc.click_at(50, 50), None);

    assert_eq!(doc.poll_events(), vec![pagedom::Event::Click { target: header }]);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_text_rows() {
    let mut doc = Document::new(20, 5);
    doc.mount(entry("Title A", "body a"));
    doc.mount(entry("Title B", "body b"));

    let mut buf = Buffer::new(20, 5);
    pagedom::render::render_to_buffer(&doc, &mut buf);

    assert_eq!(buf.row_text(0), "Title A");
    assert_eq!(buf.row_text(1), "body a");
    assert_eq!(buf.row_text(2), "Title B");
    assert_eq!(buf.row_text(3), "body b");
    assert_eq!(buf.row_text(4), "");
}

#[test]
fn test_render_clips_to_max_height() {
    let mut doc = Document::new(20, 5);
    let first = doc.mount(entry("Title A", "body a"));
    doc.mount(entry("Title B", "body b"));
    doc.set_max_height(first, Some(1)).expect("set");

    let mut buf = Buffer::new(20, 5);
    pagedom::render::render_to_buffer(&doc, &mut buf);

    assert_eq!(buf.row_text(0), "Title A");
    assert_eq!(buf.row_text(1), "Title B");
    assert_eq!(buf.row_text(2), "body b");
}

#[test]
fn test_render_background_and_before() {
    let highlight = Rgb::new(30, 60, 120);
    let mut doc = Document::new(20, 3);
    let header = doc.mount(Element::div().classes("header active").text("Title"));
    doc.set_stylesheet(
        Stylesheet::new()
            .rule(StyleRule::new(Selector::class("header")).before("+ "))
            .rule(StyleRule::new(Selector::class("active")).bg(highlight)),
    );

    let mut buf = Buffer::new(20, 3);
    let result = pagedom::render::render_to_buffer(&doc, &mut buf);

    assert_eq!(result.get(header), Some(Rect::new(0, 0, 20, 1)));
    assert_eq!(buf.row_text(0), "+ Title");
    assert_eq!(buf.get(19, 0).map(|c| c.bg), Some(highlight));
    assert_ne!(buf.get(0, 1).map(|c| c.bg), Some(highlight));
}

#[test]
fn test_buffer_diff_reports_changed_cells() {
    let mut doc = Document::new(10, 2);
    let id = doc.mount(Element::div().text("ab"));

    let mut before = Buffer::new(10, 2);
    pagedom::render::render_to_buffer(&doc, &mut before);

    doc.set_text(id, "ax").expect("set text");
    let mut after = Buffer::new(10, 2);
    pagedom::render::render_to_buffer(&doc, &mut after);

    let changed: Vec<(u16, u16, char)> = after.diff(&before).map(|(x, y, c)| (x, y, c.char)).collect();
    assert_eq!(changed, vec![(1, 0, 'x')]);
}

//! Block-flow measurement and layout.
//!
//! Every element stacks its text lines and then its children vertically.
//! Text wraps at the element's inner width, so the viewport width feeds
//! straight into every measured height.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::document::{Document, NodeId};
use crate::text::wrap_words;

/// Placement of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBox {
    pub rect: Rect,
    /// Part of the viewport this element may paint into after ancestor
    /// max-height clipping.
    pub visible: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    boxes: HashMap<NodeId, LayoutBox>,
    order: Vec<NodeId>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, layout_box: LayoutBox) {
        if self.boxes.insert(id, layout_box).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<Rect> {
        self.boxes.get(&id).map(|b| b.rect)
    }

    pub fn visible(&self, id: NodeId) -> Option<Rect> {
        self.boxes.get(&id).map(|b| b.visible)
    }

    /// Boxes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LayoutBox)> {
        self.order
            .iter()
            .filter_map(|id| self.boxes.get(id).map(|b| (*id, b)))
    }
}

/// Width available to `id`: the viewport minus its ancestors' horizontal
/// padding.
pub(crate) fn available_width(doc: &Document, id: NodeId) -> u16 {
    doc.ancestors(id)
        .filter_map(|ancestor| doc.node(ancestor))
        .fold(doc.viewport().0, |width, node| {
            width.saturating_sub(node.padding.horizontal_sum())
        })
}

/// Wrapped text lines of `id` itself (generated `before` content included),
/// at `inner_width` columns.
pub(crate) fn content_lines(doc: &Document, id: NodeId, inner_width: u16) -> Vec<String> {
    let Some(node) = doc.node(id) else {
        return Vec::new();
    };
    let before = doc.computed_style(id).before;

    let content = match (before, node.text.as_deref()) {
        (None, None) => return Vec::new(),
        (Some(before), None) => before,
        (None, Some(text)) => text.to_string(),
        (Some(before), Some(text)) => format!("{before}{text}"),
    };

    wrap_words(&content, usize::from(inner_width))
}

/// Unclamped height of `id` laid out at `width`.
pub fn natural_height(doc: &Document, id: NodeId, width: u16) -> u16 {
    let Some(node) = doc.node(id) else {
        return 0;
    };
    let inner_width = width.saturating_sub(node.padding.horizontal_sum());

    let text_height = u16::try_from(content_lines(doc, id, inner_width).len()).unwrap_or(u16::MAX);
    let children_height = node
        .children()
        .iter()
        .fold(0u16, |sum, &child| {
            sum.saturating_add(offset_height(doc, child, inner_width))
        });

    node.padding
        .vertical_sum()
        .saturating_add(text_height)
        .saturating_add(children_height)
}

/// Natural height clamped by the applied max-height.
pub(crate) fn offset_height(doc: &Document, id: NodeId, width: u16) -> u16 {
    let natural = natural_height(doc, id, width);
    match doc.applied_max_height(id) {
        Some(max) => natural.min(max),
        None => natural,
    }
}

/// Lay out the whole document against its viewport.
pub fn layout(doc: &Document) -> LayoutResult {
    let (width, height) = doc.viewport();
    let mut result = LayoutResult::new();
    layout_node(
        doc,
        doc.root(),
        0,
        0,
        width,
        Rect::from_size(width, height),
        &mut result,
    );
    result
}

fn layout_node(
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    width: u16,
    clip: Rect,
    result: &mut LayoutResult,
) {
    let Some(node) = doc.node(id) else {
        return;
    };

    let height = offset_height(doc, id, width);
    let rect = Rect::new(x, y, width, height);

    // A max-height hides overflow, so it clips descendants too.
    let visible = if doc.applied_max_height(id).is_some() {
        clip.intersection(&rect)
    } else {
        clip
    };
    result.insert(id, LayoutBox { rect, visible });

    let inner_x = x.saturating_add(node.padding.left);
    let inner_width = width.saturating_sub(node.padding.horizontal_sum());
    let text_height = u16::try_from(content_lines(doc, id, inner_width).len()).unwrap_or(u16::MAX);

    let mut child_y = y.saturating_add(node.padding.top).saturating_add(text_height);
    for &child in node.children() {
        layout_node(doc, child, inner_x, child_y, inner_width, visible, result);
        child_y = child_y.saturating_add(offset_height(doc, child, inner_width));
    }
}

/// Deepest element whose box contains (`x`, `y`) and is not clipped away.
pub fn hit_test(result: &LayoutResult, doc: &Document, x: u16, y: u16) -> Option<NodeId> {
    let mut hit = None;
    for (id, layout_box) in result.iter() {
        if doc.node(id).is_none() {
            continue;
        }
        if layout_box.rect.contains(x, y) && layout_box.visible.contains(x, y) {
            hit = Some(id);
        }
    }
    hit
}

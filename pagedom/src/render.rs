use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::layout::{content_lines, layout, LayoutResult};
use crate::style::Rgb;
use crate::text::char_width;

/// Lay out `doc` and paint it into `buf`.
pub fn render_to_buffer(doc: &Document, buf: &mut Buffer) -> LayoutResult {
    let result = layout(doc);

    for (id, layout_box) in result.iter() {
        let Some(node) = doc.node(id) else {
            continue;
        };
        let area = layout_box.rect.intersection(&layout_box.visible);
        if area.is_empty() {
            continue;
        }

        let computed = doc.computed_style(id);

        if let Some(bg) = computed.background {
            fill_background(buf, area, bg);
        }

        let inner_x = layout_box.rect.x.saturating_add(node.padding.left);
        let inner_width = layout_box
            .rect
            .width
            .saturating_sub(node.padding.horizontal_sum());
        let mut y = layout_box.rect.y.saturating_add(node.padding.top);

        for line in content_lines(doc, id, inner_width) {
            if y >= area.bottom() {
                break;
            }
            if y >= area.y {
                let mut x = inner_x;
                for ch in line.chars() {
                    let width = char_width(ch) as u16;
                    if width == 0 {
                        continue;
                    }
                    if x.saturating_add(width) > area.right() {
                        break;
                    }
                    let bg = buf.get(x, y).map(|cell| cell.bg).unwrap_or_default();
                    buf.set(
                        x,
                        y,
                        Cell {
                            char: ch,
                            fg: computed.foreground.unwrap_or(Rgb::new(255, 255, 255)),
                            bg,
                            style: computed.text_style,
                            wide_continuation: false,
                        },
                    );
                    for offset in 1..width {
                        if let Some(cell) = buf.get_mut(x + offset, y) {
                            cell.wide_continuation = true;
                        }
                    }
                    x = x.saturating_add(width);
                }
            }
            y = y.saturating_add(1);
        }
    }

    result
}

fn fill_background(buf: &mut Buffer, area: crate::layout::Rect, bg: Rgb) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

//! Paint an element tree into a cell buffer.

use crate::buffer::Buffer;
use crate::element::{paint_order, Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, Style, TextStyle, Theme};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

/// Foreground and text attributes flow down to descendants, like CSS `color`.
#[derive(Clone, Copy)]
struct Inherited {
    fg: Rgb,
    text_style: TextStyle,
}

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer, theme: &dyn Theme) {
    let inherited = Inherited {
        fg: DEFAULT_FG,
        text_style: TextStyle::new(),
    };
    render_element(root, layout, buf, theme, inherited);
}

fn effective_style(element: &Element) -> Style {
    match (&element.style_focused, element.focused) {
        (Some(focused), true) => element.style.merged(focused),
        _ => element.style.clone(),
    }
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    theme: &dyn Theme,
    parent: Inherited,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let style = effective_style(element);
    let inherited = Inherited {
        fg: style
            .foreground
            .as_ref()
            .and_then(|c| c.resolve(theme))
            .unwrap_or(parent.fg),
        text_style: parent.text_style.union(style.text_style),
    };

    if let Some(bg) = style.background.as_ref().and_then(|c| c.resolve(theme)) {
        buf.fill(rect, bg);
    }

    render_border(style.border, rect, buf, inherited.fg);

    let border = style.border.size();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, inner, buf, inherited),
        Content::Children(children) => {
            for child in paint_order(children) {
                render_element(child, layout, buf, theme, inherited);
            }
        }
    }
}

fn render_text(text: &str, area: Rect, buf: &mut Buffer, inherited: Inherited) {
    for (line_no, line) in text.split('\n').enumerate() {
        let y = area.y.saturating_add(line_no as u16);
        if y >= area.bottom() {
            break;
        }

        let visible = truncate_to_width(line, area.width as usize);
        let mut x = area.x;
        for ch in visible.chars() {
            let width = char_width(ch).max(1) as u16;
            if x.saturating_add(width) > area.right() {
                break;
            }
            buf.put(x, y, ch, inherited.fg);
            if let Some(cell) = buf.get_mut(x, y) {
                cell.style = inherited.text_style;
            }
            for offset in 1..width {
                if let Some(cell) = buf.get_mut(x + offset, y) {
                    cell.continuation = true;
                }
            }
            x += width;
        }
    }
}

fn render_border(border: Border, rect: Rect, buf: &mut Buffer, fg: Rgb) {
    let [tl, tr, bl, br, h, v] = match border {
        Border::None => return,
        Border::Single => ['┌', '┐', '└', '┘', '─', '│'],
        Border::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    for x in left + 1..right {
        buf.put(x, top, h, fg);
        buf.put(x, bottom, h, fg);
    }
    for y in top + 1..bottom {
        buf.put(left, y, v, fg);
        buf.put(right, y, v, fg);
    }
    buf.put(left, top, tl, fg);
    buf.put(right, top, tr, fg);
    buf.put(left, bottom, bl, fg);
    buf.put(right, bottom, br, fg);
}

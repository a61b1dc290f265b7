//! Box layout: column/row stacking with gaps, padding, margins, borders and
//! absolutely positioned overlays.

mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(root, available, true, &mut result);
    result
}

/// Content-based size of the border box (padding and border included,
/// margin excluded). Absolute children do not contribute.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let border = element.style.border.size() * 2;
    let chrome_w = element.padding.horizontal() + border;
    let chrome_h = element.padding.vertical() + border;

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let lines: Vec<&str> = text.split('\n').collect();
            let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
            (width as u16, lines.len() as u16)
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| c.position != Position::Absolute)
                .map(outer_size)
                .collect();
            let gaps = element.gap.saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => (
                    sizes.iter().map(|s| s.0).sum::<u16>().saturating_add(gaps),
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().map(|s| s.1).sum::<u16>().saturating_add(gaps),
                ),
            }
        }
    };

    (
        content_w.saturating_add(chrome_w),
        content_h.saturating_add(chrome_h),
    )
}

/// Preferred size including margin, used when stacking siblings.
fn outer_size(element: &Element) -> (u16, u16) {
    let (w, h) = intrinsic_size(element);
    let w = match element.width {
        Size::Fixed(n) => n,
        _ => w,
    };
    let h = match element.height {
        Size::Fixed(n) => n,
        _ => h,
    };
    (
        w.saturating_add(element.margin.horizontal()),
        h.saturating_add(element.margin.vertical()),
    )
}

fn resolve(size: Size, intrinsic: u16, available: u16, clamp: bool) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto if clamp => intrinsic.min(available),
        Size::Auto => intrinsic,
    }
}

fn place(element: &Element, slot: Rect, clamp: bool, result: &mut LayoutResult) -> Rect {
    let margin = &element.margin;
    let area = slot.shrink(margin.top, margin.right, margin.bottom, margin.left);
    let (iw, ih) = intrinsic_size(element);
    let rect = Rect::new(
        area.x,
        area.y,
        resolve(element.width, iw, area.width, clamp),
        resolve(element.height, ih, area.height, clamp),
    );
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
    rect
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let border = element.style.border.size();
    let pad = &element.padding;
    let inner = rect.shrink(
        pad.top + border,
        pad.right + border,
        pad.bottom + border,
        pad.left + border,
    );

    let mut cursor = match element.direction {
        Direction::Row => inner.x,
        Direction::Column => inner.y,
    };

    for child in children {
        if child.position == Position::Absolute {
            // Relative to the parent's border box, free to overflow it.
            let slot = Rect::new(
                rect.x.saturating_add(child.left),
                rect.y.saturating_add(child.top),
                rect.width,
                u16::MAX - rect.y.saturating_add(child.top),
            );
            place(child, slot, false, result);
            continue;
        }

        let slot = match element.direction {
            Direction::Row => Rect::new(
                cursor,
                inner.y,
                inner.right().saturating_sub(cursor),
                inner.height,
            ),
            Direction::Column => Rect::new(
                inner.x,
                cursor,
                inner.width,
                inner.bottom().saturating_sub(cursor),
            ),
        };
        let placed = place(child, slot, true, result);
        cursor = match element.direction {
            Direction::Row => placed
                .right()
                .saturating_add(child.margin.right)
                .saturating_add(element.gap),
            Direction::Column => placed
                .bottom()
                .saturating_add(child.margin.bottom)
                .saturating_add(element.gap),
        };
    }
}

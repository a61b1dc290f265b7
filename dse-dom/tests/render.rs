use dse_dom::render::render_to_buffer;
use dse_dom::{
    layout, Border, Buffer, Color, Element, EmptyTheme, Position, Rect, Rgb, Size, Style, Theme,
};

struct TestTheme;

impl Theme for TestTheme {
    fn resolve(&self, name: &str) -> Option<Rgb> {
        match name {
            "primary" => Some(Rgb::new(1, 2, 3)),
            _ => None,
        }
    }
}

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    render_with(root, width, height, &EmptyTheme)
}

fn render_with(root: &Element, width: u16, height: u16, theme: &dyn Theme) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf, theme);
    buf
}

#[test]
fn test_text_lands_in_layout_position() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::text("second"));

    let buf = render(&root, 20, 3);

    assert_eq!(buf.row_text(0), "first");
    assert_eq!(buf.row_text(1), "second");
    assert_eq!(buf.row_text(2), "");
}

#[test]
fn test_text_truncates_with_ellipsis() {
    let root = Element::text("abcdefghij").width(Size::Fixed(5));

    let buf = render(&root, 20, 1);

    assert_eq!(buf.row_text(0), "abcd…");
}

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .width(Size::Fixed(3))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(10, 20, 30)));

    let buf = render(&root, 5, 3);

    let bg = Rgb::new(10, 20, 30);
    assert_eq!(buf.get(0, 0).map(|c| c.bg), Some(bg));
    assert_eq!(buf.get(2, 1).map(|c| c.bg), Some(bg));
    assert_ne!(buf.get(3, 0).map(|c| c.bg), Some(bg));
    assert_ne!(buf.get(0, 2).map(|c| c.bg), Some(bg));
}

#[test]
fn test_foreground_inherits_and_resolves_theme_vars() {
    let root = Element::col()
        .style(Style::new().foreground(Color::var("primary")))
        .child(Element::text("x"));

    let buf = render_with(&root, 3, 1, &TestTheme);

    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgb::new(1, 2, 3)));
}

#[test]
fn test_unknown_theme_var_falls_back_to_parent() {
    let root = Element::text("x").style(Style::new().foreground(Color::var("missing")));

    let buf = render_with(&root, 3, 1, &TestTheme);

    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgb::new(255, 255, 255)));
}

#[test]
fn test_border_is_drawn() {
    let root = Element::box_()
        .style(Style::new().border(Border::Single))
        .child(Element::text("hi"));

    let buf = render(&root, 10, 3);

    assert_eq!(buf.row_text(0), "┌──┐");
    assert_eq!(buf.row_text(1), "│hi│");
    assert_eq!(buf.row_text(2), "└──┘");
}

#[test]
fn test_overlay_paints_over_flow_sibling() {
    let root = Element::col()
        .child(Element::text("Trigger"))
        .child(Element::text("Beneath"))
        .child(
            Element::text("Popup")
                .position(Position::Absolute)
                .top(1)
                .style(Style::new().background(Color::rgb(0, 0, 255))),
        );

    let buf = render(&root, 20, 3);

    assert_eq!(buf.row_text(0), "Trigger");
    assert_eq!(buf.row_text(1), "Popupth");
}

#[test]
fn test_focused_style_applies_only_when_focused() {
    let focus_bg = Color::rgb(9, 9, 9);
    let base = Element::text("f").style_focused(Style::new().background(focus_bg));

    let mut focused = base.clone();
    focused.focused = true;

    let plain = render(&base, 2, 1);
    let lit = render(&focused, 2, 1);

    assert_ne!(plain.get(0, 0).map(|c| c.bg), Some(Rgb::new(9, 9, 9)));
    assert_eq!(lit.get(0, 0).map(|c| c.bg), Some(Rgb::new(9, 9, 9)));
}

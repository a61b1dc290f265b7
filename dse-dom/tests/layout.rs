use dse_dom::layout::intrinsic_size;
use dse_dom::{layout, Border, Edges, Element, Position, Rect, Size, Style};

fn run(root: &Element) -> dse_dom::LayoutResult {
    layout(root, Rect::new(0, 0, 80, 24))
}

// ============================================================================
// Flow layout
// ============================================================================

#[test]
fn test_column_stacks_children_with_gap_and_padding() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .padding(Edges::all(1))
        .child(Element::text("abc").id("a"))
        .child(Element::text("hello").id("b"));

    let result = run(&root);

    assert_eq!(result["root"], Rect::new(0, 0, 7, 5));
    assert_eq!(result["a"], Rect::new(1, 1, 3, 1));
    assert_eq!(result["b"], Rect::new(1, 3, 5, 1));
}

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .id("root")
        .gap(2)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cd").id("b"));

    let result = run(&root);

    assert_eq!(result["a"], Rect::new(0, 0, 2, 1));
    assert_eq!(result["b"], Rect::new(4, 0, 2, 1));
    assert_eq!(result["root"], Rect::new(0, 0, 6, 1));
}

#[test]
fn test_fixed_and_fill_sizes() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .child(Element::box_().id("fixed").width(Size::Fixed(10)).height(Size::Fixed(4)))
        .child(Element::text("x").id("fill").width(Size::Fill));

    let result = run(&root);

    assert_eq!(result["root"].width, 80);
    assert_eq!(result["fixed"], Rect::new(0, 0, 10, 4));
    assert_eq!(result["fill"], Rect::new(0, 4, 80, 1));
}

#[test]
fn test_margin_offsets_child() {
    let root = Element::col()
        .id("root")
        .child(Element::text("m").id("child").margin(Edges::new(1, 0, 0, 2)));

    let result = run(&root);

    assert_eq!(result["child"], Rect::new(2, 1, 1, 1));
    assert_eq!(result["root"], Rect::new(0, 0, 3, 2));
}

#[test]
fn test_border_insets_content() {
    let root = Element::box_()
        .id("root")
        .style(Style::new().border(Border::Single))
        .child(Element::text("hi").id("text"));

    let result = run(&root);

    assert_eq!(result["root"], Rect::new(0, 0, 4, 3));
    assert_eq!(result["text"], Rect::new(1, 1, 2, 1));
}

// ============================================================================
// Absolute positioning
// ============================================================================

#[test]
fn test_absolute_child_is_out_of_flow() {
    let root = Element::col()
        .id("anchor")
        .child(Element::text("trigger").id("trigger"))
        .child(
            Element::col()
                .id("overlay")
                .position(Position::Absolute)
                .top(3)
                .child(Element::text("overlay-long-text").id("option")),
        );

    let result = run(&root);

    // Parent only sizes to its flow content
    assert_eq!(result["anchor"], Rect::new(0, 0, 7, 1));
    // Overlay is offset from the parent and may be wider than it
    assert_eq!(result["overlay"], Rect::new(0, 3, 17, 1));
    assert_eq!(result["option"], Rect::new(0, 3, 17, 1));
}

#[test]
fn test_absolute_offset_is_relative_to_parent() {
    let root = Element::col()
        .id("root")
        .padding(Edges::all(2))
        .child(
            Element::col()
                .id("select")
                .child(Element::text("label").id("label"))
                .child(
                    Element::text("popup")
                        .id("popup")
                        .position(Position::Absolute)
                        .top(2)
                        .left(1),
                ),
        );

    let result = run(&root);

    assert_eq!(result["select"], Rect::new(2, 2, 5, 1));
    assert_eq!(result["popup"], Rect::new(3, 4, 5, 1));
}

#[test]
fn test_intrinsic_size_counts_lines() {
    let el = Element::text("one\nthree");
    assert_eq!(intrinsic_size(&el), (5, 2));
}

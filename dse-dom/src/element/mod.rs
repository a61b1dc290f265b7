mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::aria::Role;
use crate::types::Position;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Mutable lookup by ID.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Collect every element (depth-first, document order) matching `pred`.
pub fn find_all<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, pred, &mut found);
    found
}

fn collect<'a>(element: &'a Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if pred(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect(child, pred, out);
    }
}

/// All elements with the given role, in document order.
pub fn find_all_by_role(root: &Element, role: Role) -> Vec<&Element> {
    find_all(root, &|el| el.role == Some(role))
}

/// First element with the given role, in document order.
pub fn find_by_role(root: &Element, role: Role) -> Option<&Element> {
    find_all_by_role(root, role).into_iter().next()
}

/// Deepest element whose own text content equals `text`.
pub fn find_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    find_all(root, &|el| matches!(&el.content, Content::Text(t) if t == text))
        .into_iter()
        .next()
}

/// Ancestor chain from the root down to (and including) the element `id`.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }
    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }
    None
}

/// Nearest element, starting at `id` and walking up, matching `pred`.
pub fn closest<'a>(
    root: &'a Element,
    id: &str,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a Element> {
    path_to(root, id)?.into_iter().rev().find(|el| pred(el))
}

/// Children in paint order: flow children in document order, then absolute
/// children sorted by z-index (stable).
pub fn paint_order(children: &[Element]) -> Vec<&Element> {
    let mut flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();
    let mut absolute: Vec<&Element> = children
        .iter()
        .filter(|c| c.position == Position::Absolute)
        .collect();
    absolute.sort_by_key(|c| c.z_index);
    flow.append(&mut absolute);
    flow
}

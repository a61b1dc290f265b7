use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::aria::{Aria, HasPopup, Role};
use crate::types::{Direction, Edges, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Semantics
    pub role: Option<Role>,
    pub aria: Aria,
    pub classes: Vec<String>,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub margin: Edges,
    pub direction: Direction,
    pub gap: u16,

    // Positioning
    pub position: Position,
    pub top: u16,
    pub left: u16,
    pub z_index: i16,

    // Visual
    pub style: Style,
    pub style_focused: Option<Style>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Mirrors `tabindex`; `None` when the attribute is absent.
    pub tab_index: Option<i32>,

    /// Whether this element is currently focused. Set by the runtime, not by
    /// components.
    pub focused: bool,

    // Custom data storage (test ids, keys, ...)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            role: None,
            aria: Aria::default(),
            classes: Vec::new(),
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            margin: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            position: Position::Static,
            top: 0,
            left: 0,
            z_index: 0,
            style: Style::default(),
            style_focused: None,
            focusable: false,
            clickable: false,
            tab_index: None,
            focused: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Semantics
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria.label = Some(label.into());
        self
    }

    pub fn aria_checked(mut self, checked: Option<bool>) -> Self {
        self.aria.checked = checked;
        self
    }

    pub fn aria_expanded(mut self, expanded: bool) -> Self {
        self.aria.expanded = Some(expanded);
        self
    }

    pub fn aria_haspopup(mut self, popup: HasPopup) -> Self {
        self.aria.haspopup = Some(popup);
        self
    }

    /// Add one or more whitespace-separated class names.
    pub fn class(mut self, names: &str) -> Self {
        for name in names.split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Space-joined class list, as `className` would read.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: u16) -> Self {
        self.top = top;
        self
    }

    pub fn left(mut self, left: u16) -> Self {
        self.left = left;
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Queries

    /// Read an attribute by DOM name: `id`, `role`, `class`, `tabindex` or
    /// any `aria-*` attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "role" => self.role.map(|r| r.as_str().to_string()),
            "class" => (!self.classes.is_empty()).then(|| self.class_name()),
            "tabindex" => self.tab_index.map(|t| t.to_string()),
            _ if name.starts_with("aria-") => self.aria.attribute(name),
            _ if name.starts_with("data-") => self.data.get(&name[5..]).cloned(),
            _ => None,
        }
    }

    /// Direct children (empty slice for text or empty elements).
    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children
                .iter()
                .map(Element::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

//! Accessibility roles and attributes.
//!
//! Elements carry a role and a small set of ARIA-style states. They are plain
//! data: nothing in the renderer depends on them, but hosts and tests query
//! them the same way assistive technology would query a browser DOM.

/// Semantic role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Listbox,
    MenuItemRadio,
    Img,
    Presentation,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Listbox => "listbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Img => "img",
            Self::Presentation => "presentation",
        }
    }
}

/// Value of `aria-haspopup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HasPopup {
    Listbox,
}

impl HasPopup {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Listbox => "listbox",
        }
    }
}

/// ARIA states and properties of an element. `None` means "attribute absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aria {
    pub label: Option<String>,
    pub checked: Option<bool>,
    pub expanded: Option<bool>,
    pub haspopup: Option<HasPopup>,
}

impl Aria {
    /// Look up an attribute by its DOM name, e.g. `aria-expanded`.
    ///
    /// Booleans are rendered as `"true"`/`"false"`, the way a browser
    /// serializes them.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "aria-label" => self.label.clone(),
            "aria-checked" => self.checked.map(|v| v.to_string()),
            "aria-expanded" => self.expanded.map(|v| v.to_string()),
            "aria-haspopup" => self.haspopup.map(|p| p.as_str().to_string()),
            _ => None,
        }
    }
}

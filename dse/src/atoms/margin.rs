use dse_dom::{Edges, Element};
use dse_foundation::Spacing;

/// Wraps children in a uniform margin taken from the spacing scale.
#[derive(Debug, Clone, Default)]
pub struct Margin {
    space: Option<Spacing>,
    children: Vec<Element>,
}

impl Margin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn space(mut self, space: Spacing) -> Self {
        self.space = Some(space);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn element(self) -> Element {
        let mut element = Element::col().children(self.children);
        if let Some(space) = self.space {
            element = element
                .class(&format!("dse-margin-{space}"))
                .margin(Edges::all(space.cells()));
        }
        element
    }
}

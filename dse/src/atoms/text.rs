use dse_dom::{Element, Style};
use dse_foundation::FontSize;

/// A run of text at one step of the type scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    size: FontSize,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: FontSize::default(),
        }
    }

    pub fn size(mut self, size: FontSize) -> Self {
        self.size = size;
        self
    }

    pub fn element(&self) -> Element {
        Element::text(&self.content)
            .class(&format!("dse-text dse-text-{}", self.size))
            .style(Style::new().text_style(self.size.text_style()))
    }
}

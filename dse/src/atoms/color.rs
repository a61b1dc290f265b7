use dse_dom::{Color, Element, Role, Size, Style};
use dse_foundation::Spacing;

use crate::error::{DseError, Result};

/// A solid block of colour, sized by spacing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSwatch {
    hex_code: String,
    width: Spacing,
    height: Spacing,
}

impl ColorSwatch {
    pub fn new(hex_code: impl Into<String>) -> Self {
        Self {
            hex_code: hex_code.into(),
            width: Spacing::Xs,
            height: Spacing::Xs,
        }
    }

    pub fn width(mut self, width: Spacing) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Spacing) -> Self {
        self.height = height;
        self
    }

    pub fn hex_code(&self) -> &str {
        &self.hex_code
    }

    /// Build the swatch. Fails when the hex code does not parse.
    pub fn element(&self) -> Result<Element> {
        let color = Color::hex(&self.hex_code).map_err(|source| DseError::InvalidColor {
            hex: self.hex_code.clone(),
            source,
        })?;

        // Cells are about twice as tall as they are wide.
        Ok(Element::box_()
            .role(Role::Img)
            .aria_label(&self.hex_code)
            .class(&format!("dse-width-{} dse-height-{}", self.width, self.height))
            .width(Size::Fixed(self.width.cells().saturating_mul(2)))
            .height(Size::Fixed(self.height.cells()))
            .style(Style::new().background(color)))
    }
}

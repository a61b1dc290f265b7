use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(self) -> Self {
        let text_style = self.text_style.bold();
        self.text_style(text_style)
    }

    pub fn dim(self) -> Self {
        let text_style = self.text_style.dim();
        self.text_style(text_style)
    }

    pub fn underline(self) -> Self {
        let text_style = self.text_style.underline();
        self.text_style(text_style)
    }

    /// Layer `other` on top of `self`; set fields in `other` win and text
    /// attributes accumulate.
    pub fn merged(&self, other: &Style) -> Style {
        Style {
            background: other.background.as_ref().or(self.background.as_ref()).cloned(),
            foreground: other.foreground.as_ref().or(self.foreground.as_ref()).cloned(),
            border: match other.border {
                Border::None => self.border,
                border => border,
            },
            text_style: self.text_style.union(other.text_style),
        }
    }
}

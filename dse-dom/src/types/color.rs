use std::str::FromStr;

pub use palette::rgb::FromHexError;
use palette::Srgb;

use super::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// Named theme variable, resolved at render time.
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Parse a CSS-style hex code (`#000`, `#1e90ff`, with or without `#`).
    pub fn hex(code: &str) -> Result<Self, FromHexError> {
        let srgb = Srgb::<u8>::from_str(code.trim())?;
        let (r, g, b) = srgb.into_components();
        Ok(Self::rgb(r, g, b))
    }

    /// Resolve to a concrete colour. Unknown variables resolve to `None`.
    pub fn resolve(&self, theme: &dyn Theme) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Var(name) => theme.resolve(name),
        }
    }
}

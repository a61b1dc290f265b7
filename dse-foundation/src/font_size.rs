use std::fmt;

use dse_dom::TextStyle;
use serde::{Deserialize, Serialize};

/// Type scale token. Serialized by name, e.g. `"base"` or `"xl"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl FontSize {
    pub const ALL: [FontSize; 7] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Xxxl,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::Xxxl => "xxxl",
        }
    }

    /// Terminal cells have one glyph size, so the scale maps onto weight:
    /// small sizes are dimmed, large sizes are bold.
    pub const fn text_style(&self) -> TextStyle {
        match self {
            Self::Xs | Self::Sm => TextStyle::new().dim(),
            Self::Base => TextStyle::new(),
            Self::Lg | Self::Xl | Self::Xxl | Self::Xxxl => TextStyle::new().bold(),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

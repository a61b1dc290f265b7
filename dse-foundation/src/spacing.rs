use std::fmt;

use serde::{Deserialize, Serialize};

/// Spacing scale token used for margins and swatch dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    #[default]
    None,
    Xxxs,
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl Spacing {
    pub const ALL: [Spacing; 10] = [
        Self::None,
        Self::Xxxs,
        Self::Xxs,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Xxxl,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xxxs => "xxxs",
            Self::Xxs => "xxs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::Xxxl => "xxxl",
        }
    }

    /// Size in terminal cells.
    pub const fn cells(&self) -> u16 {
        match self {
            Self::None => 0,
            Self::Xxxs | Self::Xxs => 1,
            Self::Xs => 2,
            Self::Sm => 3,
            Self::Md => 4,
            Self::Lg => 6,
            Self::Xl => 8,
            Self::Xxl => 12,
            Self::Xxxl => 16,
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use dse_dom::{Rgb, Theme};

/// The default palette. Components refer to these by name through
/// `Color::var`, so hosts can swap the whole theme at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTheme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub surface: Rgb,
    pub primary: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    /// Option under the keyboard/mouse highlight.
    pub highlight: Rgb,
    /// Committed option.
    pub selected: Rgb,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl DefaultTheme {
    pub const NAMES: [&'static str; 8] = [
        "background",
        "foreground",
        "surface",
        "primary",
        "muted",
        "border",
        "highlight",
        "selected",
    ];

    pub const fn dark() -> Self {
        Self {
            background: Rgb::new(17, 24, 39),
            foreground: Rgb::new(243, 244, 246),
            surface: Rgb::new(31, 41, 55),
            primary: Rgb::new(3, 105, 161),
            muted: Rgb::new(156, 163, 175),
            border: Rgb::new(75, 85, 99),
            highlight: Rgb::new(55, 65, 81),
            selected: Rgb::new(14, 165, 233),
        }
    }

    pub const fn light() -> Self {
        Self {
            background: Rgb::new(255, 255, 255),
            foreground: Rgb::new(17, 24, 39),
            surface: Rgb::new(243, 244, 246),
            primary: Rgb::new(3, 105, 161),
            muted: Rgb::new(107, 114, 128),
            border: Rgb::new(209, 213, 219),
            highlight: Rgb::new(229, 231, 235),
            selected: Rgb::new(2, 132, 199),
        }
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Rgb> {
        match name {
            "background" | "bg" => Some(self.background),
            "foreground" | "fg" | "text" => Some(self.foreground),
            "surface" => Some(self.surface),
            "primary" => Some(self.primary),
            "muted" => Some(self.muted),
            "border" => Some(self.border),
            "highlight" => Some(self.highlight),
            "selected" => Some(self.selected),
            _ => None,
        }
    }
}

//! Design tokens shared by every component: the type scale, the spacing
//! scale and the default colour theme.

mod font_size;
mod spacing;
mod theme;

pub use font_size::FontSize;
pub use spacing::Spacing;
pub use theme::DefaultTheme;

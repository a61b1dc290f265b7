mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, FromHexError, Rgb};
pub use edges::Edges;
pub use enums::{Border, Direction, Position, Size, TextStyle};
pub use style::Style;
pub use theme::{EmptyTheme, Theme};

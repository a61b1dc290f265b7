//! Stateless visual primitives.

mod button;
mod color;
mod margin;
mod text;

pub use button::Button;
pub use color::ColorSwatch;
pub use margin::Margin;
pub use text::Text;

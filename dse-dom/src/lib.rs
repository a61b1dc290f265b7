//! dse-dom: an in-process element tree for terminal UIs.
//!
//! Elements carry roles, ARIA-style states and class lists the way a browser
//! DOM does, so components can be queried like one. A box layout pass, a
//! cell-buffer renderer and a crossterm backend put the tree on screen.

pub mod aria;
pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use aria::{Aria, HasPopup, Role};
pub use buffer::{Buffer, Cell};
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;

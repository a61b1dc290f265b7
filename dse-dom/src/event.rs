//! Events as components see them: already targeted at an element ID.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton as CtMouseButton};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, addressed to the focused element (if any).
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse press. `target` is the topmost clickable element under it.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    MouseEnter { target: String },
    MouseLeave { target: String },
    Focus { target: String },
    Blur { target: String },
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target, .. } => target.as_deref(),
            Self::MouseEnter { target }
            | Self::MouseLeave { target }
            | Self::Focus { target }
            | Self::Blur { target } => Some(target),
            Self::Resize { .. } => None,
        }
    }
}

/// The keys components react to. Space gets its own variant so keymaps can
/// match it next to Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Escape,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// `None` for keys nothing here handles (function keys, paging, ...).
    pub fn from_code(code: KeyCode) -> Option<Self> {
        Some(match code {
            KeyCode::Char(' ') => Self::Space,
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Escape,
            KeyCode::Tab => Self::Tab,
            KeyCode::BackTab => Self::BackTab,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<CtMouseButton> for MouseButton {
    fn from(button: CtMouseButton) -> Self {
        match button {
            CtMouseButton::Left => Self::Left,
            CtMouseButton::Right => Self::Right,
            CtMouseButton::Middle => Self::Middle,
        }
    }
}

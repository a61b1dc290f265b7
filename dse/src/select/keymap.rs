//! Key to command mapping. Unmapped keys return `None` and are left for the
//! host to handle.

use dse_dom::Key;

use super::SelectCommand;

/// Keys on the trigger.
pub fn trigger_command(key: Key) -> Option<SelectCommand> {
    match key {
        Key::Space | Key::Down => Some(SelectCommand::Open {
            seed_highlight: true,
        }),
        Key::Up => Some(SelectCommand::Open {
            seed_highlight: false,
        }),
        _ => None,
    }
}

/// Keys on an option inside the open overlay.
pub fn option_command(key: Key) -> Option<SelectCommand> {
    match key {
        Key::Escape => Some(SelectCommand::Close),
        Key::Down => Some(SelectCommand::HighlightNext),
        Key::Up => Some(SelectCommand::HighlightPrev),
        Key::Enter => Some(SelectCommand::CommitHighlighted),
        _ => None,
    }
}

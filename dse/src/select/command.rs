/// Everything that can happen to a select. Raw input is translated into
/// these by [`keymap`](super::keymap) and the element handlers; the state
/// machine only ever sees commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectCommand {
    /// Flip the overlay open/closed.
    Toggle,
    /// Force the overlay open, optionally highlighting the first option.
    Open { seed_highlight: bool },
    /// Close the overlay.
    Close,
    HighlightNext,
    HighlightPrev,
    /// Set or clear the highlight directly (pointer enter/leave).
    Highlight(Option<usize>),
    /// Commit whatever is highlighted; no-op without a highlight.
    CommitHighlighted,
    /// Commit the option at this index.
    Commit(usize),
    /// The trigger was measured at a new height.
    TriggerResized { height: u16 },
}

//! The select state machine.
//!
//! `SelectState` holds selection, overlay and highlight state and changes
//! only through [`SelectState::apply`]. It knows nothing about elements,
//! handlers or locks, which keeps every transition testable on its own.

use super::SelectCommand;
use crate::config::DEFAULT_OVERLAY_GAP;

/// Height assumed for the trigger before the first layout pass.
const INITIAL_TRIGGER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    /// Committed option.
    pub selected_index: Option<usize>,
    /// Whether the overlay is shown.
    pub is_open: bool,
    /// Option under the keyboard/pointer highlight, independent of selection.
    pub highlighted_index: Option<usize>,
    /// Last measured trigger height.
    pub trigger_height: u16,
    /// Rows between trigger and overlay.
    pub overlay_gap: u16,
}

/// What a single command did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Any field of the state changed.
    pub changed: bool,
    /// An option was committed and observers were told about it.
    pub commit: Option<usize>,
    /// The overlay went from open to closed.
    pub closed: bool,
    /// Option that should receive focus once the new tree is built.
    pub focus: Option<usize>,
}

impl Default for SelectState {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_GAP)
    }
}

impl SelectState {
    pub fn new(overlay_gap: u16) -> Self {
        Self {
            selected_index: None,
            is_open: false,
            highlighted_index: None,
            trigger_height: INITIAL_TRIGGER_HEIGHT,
            overlay_gap,
        }
    }

    /// Vertical offset of the overlay from the top of the trigger.
    pub fn anchor_offset(&self) -> u16 {
        self.trigger_height.saturating_add(self.overlay_gap)
    }

    /// Index a commit command would commit, if it is valid for `len`
    /// options. Lets the caller notify observers before the state moves.
    pub fn commit_target(&self, command: SelectCommand, len: usize) -> Option<usize> {
        let index = match command {
            SelectCommand::Commit(index) => index,
            SelectCommand::CommitHighlighted => self.highlighted_index?,
            _ => return None,
        };
        (index < len).then_some(index)
    }

    /// Forget selection and highlight, e.g. when the options are replaced.
    pub fn reset_indices(&mut self) {
        self.selected_index = None;
        self.highlighted_index = None;
    }

    /// Apply one command against a list of `len` options.
    pub fn apply(&mut self, command: SelectCommand, len: usize) -> Transition {
        let before = self.clone();
        let commit = self.step(command, len);
        self.transition_from(&before, commit)
    }

    /// Finish a commit whose index was resolved (and reported) before the
    /// state lock was taken. Always closes. The index is only selected if it
    /// still exists in a list of `len` options.
    pub fn commit_resolved(&mut self, index: usize, len: usize) -> Transition {
        let before = self.clone();
        self.close_on_commit(index, len);
        self.transition_from(&before, Some(index))
    }

    fn close_on_commit(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected_index = Some(index);
        } else {
            log::warn!("[select] committed index {index} gone, {len} options now");
        }
        self.is_open = false;
    }

    fn step(&mut self, command: SelectCommand, len: usize) -> Option<usize> {
        match command {
            SelectCommand::Toggle => {
                self.is_open = !self.is_open;
            }
            SelectCommand::Open { seed_highlight } => {
                self.is_open = true;
                if seed_highlight && len > 0 {
                    self.highlighted_index = Some(0);
                }
            }
            SelectCommand::Close => {
                self.is_open = false;
            }
            SelectCommand::HighlightNext => {
                if len > 0 {
                    self.highlighted_index = Some(match self.highlighted_index {
                        Some(i) if i + 1 < len => i + 1,
                        _ => 0,
                    });
                }
            }
            SelectCommand::HighlightPrev => {
                if len > 0 {
                    self.highlighted_index = Some(match self.highlighted_index {
                        None => 0,
                        Some(0) => len - 1,
                        Some(i) => (i - 1).min(len - 1),
                    });
                }
            }
            SelectCommand::Highlight(Some(index)) if index >= len => {
                log::debug!("[select] highlight {index} ignored, {len} options");
            }
            SelectCommand::Highlight(index) => {
                self.highlighted_index = index;
            }
            SelectCommand::CommitHighlighted | SelectCommand::Commit(_) => {
                match self.commit_target(command, len) {
                    Some(index) => {
                        self.close_on_commit(index, len);
                        return Some(index);
                    }
                    None if command == SelectCommand::CommitHighlighted => {
                        log::debug!("[select] enter without a highlight");
                    }
                    None => {
                        log::warn!("[select] commit of {command:?} ignored, {len} options");
                    }
                }
            }
            SelectCommand::TriggerResized { height } => {
                self.trigger_height = height;
            }
        }
        None
    }

    fn transition_from(&self, before: &SelectState, commit: Option<usize>) -> Transition {
        let navigation_moved = before.is_open != self.is_open
            || before.highlighted_index != self.highlighted_index;
        let focus = if navigation_moved && self.is_open {
            self.highlighted_index
        } else {
            None
        };

        Transition {
            changed: before != self,
            commit,
            closed: before.is_open && !self.is_open,
            focus,
        }
    }
}

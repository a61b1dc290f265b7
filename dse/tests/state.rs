use dse::select::keymap::{option_command, trigger_command};
use dse::{SelectCommand, SelectState};
use dse_dom::Key;

fn open_state(highlight: Option<usize>) -> SelectState {
    let mut state = SelectState::new(10);
    state.is_open = true;
    state.highlighted_index = highlight;
    state
}

// ============================================================================
// Open / close
// ============================================================================

#[test]
fn test_starts_closed_with_nothing_selected() {
    let state = SelectState::new(10);
    assert!(!state.is_open);
    assert_eq!(state.selected_index, None);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_toggle_parity() {
    for clicks in 0..6 {
        let mut state = SelectState::new(10);
        for _ in 0..clicks {
            state.apply(SelectCommand::Toggle, 3);
        }
        assert_eq!(state.is_open, clicks % 2 == 1, "after {clicks} toggles");
    }
}

#[test]
fn test_toggle_leaves_highlight_and_selection() {
    let mut state = open_state(Some(2));
    state.selected_index = Some(1);

    state.apply(SelectCommand::Toggle, 3);

    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, Some(2));
    assert_eq!(state.selected_index, Some(1));
}

#[test]
fn test_open_with_seed_highlights_first() {
    let mut state = SelectState::new(10);
    let transition = state.apply(SelectCommand::Open { seed_highlight: true }, 3);

    assert!(state.is_open);
    assert_eq!(state.highlighted_index, Some(0));
    assert_eq!(transition.focus, Some(0));
    assert!(transition.changed);
}

#[test]
fn test_open_without_seed_keeps_highlight() {
    let mut state = SelectState::new(10);
    let transition = state.apply(SelectCommand::Open { seed_highlight: false }, 3);

    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(transition.focus, None);
}

#[test]
fn test_seed_on_empty_list_leaves_highlight_unset() {
    let mut state = SelectState::new(10);
    state.apply(SelectCommand::Open { seed_highlight: true }, 0);

    assert!(state.is_open);
    assert_eq!(state.highlighted_index, None);
}

#[test]
fn test_close_keeps_highlight_and_selection() {
    let mut state = open_state(Some(1));
    state.selected_index = Some(2);

    let transition = state.apply(SelectCommand::Close, 3);

    assert!(!state.is_open);
    assert!(transition.closed);
    assert_eq!(state.highlighted_index, Some(1));
    assert_eq!(state.selected_index, Some(2));
    assert_eq!(transition.focus, None);
}

// ============================================================================
// Highlight navigation
// ============================================================================

#[test]
fn test_highlight_next_wraps() {
    let mut state = open_state(None);
    let mut seen = Vec::new();
    for _ in 0..4 {
        state.apply(SelectCommand::HighlightNext, 3);
        seen.push(state.highlighted_index);
    }
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(0)]);
}

#[test]
fn test_highlight_prev_wraps() {
    let mut state = open_state(None);
    let mut seen = Vec::new();
    for _ in 0..4 {
        state.apply(SelectCommand::HighlightPrev, 3);
        seen.push(state.highlighted_index);
    }
    assert_eq!(seen, vec![Some(0), Some(2), Some(1), Some(0)]);
}

#[test]
fn test_next_then_prev_returns_to_start() {
    for len in 2..6 {
        for start in 0..len {
            let mut state = open_state(Some(start));
            state.apply(SelectCommand::HighlightNext, len);
            state.apply(SelectCommand::HighlightPrev, len);
            assert_eq!(state.highlighted_index, Some(start), "len {len} start {start}");
        }
    }
}

#[test]
fn test_navigation_on_empty_list_is_noop() {
    let mut state = open_state(None);

    let next = state.apply(SelectCommand::HighlightNext, 0);
    let prev = state.apply(SelectCommand::HighlightPrev, 0);

    assert_eq!(state.highlighted_index, None);
    assert!(!next.changed);
    assert!(!prev.changed);
}

#[test]
fn test_navigation_requests_focus_while_open() {
    let mut state = open_state(Some(0));
    let transition = state.apply(SelectCommand::HighlightNext, 3);
    assert_eq!(transition.focus, Some(1));
}

#[test]
fn test_highlight_while_closed_does_not_request_focus() {
    let mut state = SelectState::new(10);
    let transition = state.apply(SelectCommand::Highlight(Some(1)), 3);

    assert_eq!(state.highlighted_index, Some(1));
    assert_eq!(transition.focus, None);
}

#[test]
fn test_pointer_highlight_and_clear() {
    let mut state = open_state(None);

    let enter = state.apply(SelectCommand::Highlight(Some(2)), 3);
    assert_eq!(state.highlighted_index, Some(2));
    assert_eq!(enter.focus, Some(2));

    let leave = state.apply(SelectCommand::Highlight(None), 3);
    assert_eq!(state.highlighted_index, None);
    assert_eq!(leave.focus, None);
    assert!(leave.changed);
}

#[test]
fn test_out_of_range_highlight_is_ignored() {
    let mut state = open_state(Some(1));
    let transition = state.apply(SelectCommand::Highlight(Some(5)), 3);

    assert_eq!(state.highlighted_index, Some(1));
    assert!(!transition.changed);
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn test_commit_selects_and_closes() {
    let mut state = open_state(Some(0));
    let transition = state.apply(SelectCommand::Commit(2), 3);

    assert_eq!(state.selected_index, Some(2));
    assert!(!state.is_open);
    assert_eq!(state.highlighted_index, Some(0));
    assert_eq!(transition.commit, Some(2));
    assert!(transition.closed);
}

#[test]
fn test_commit_highlighted() {
    let mut state = open_state(Some(1));
    let transition = state.apply(SelectCommand::CommitHighlighted, 3);

    assert_eq!(state.selected_index, Some(1));
    assert!(!state.is_open);
    assert_eq!(transition.commit, Some(1));
}

#[test]
fn test_commit_highlighted_without_highlight_is_noop() {
    let mut state = open_state(None);
    let transition = state.apply(SelectCommand::CommitHighlighted, 3);

    assert!(state.is_open);
    assert_eq!(state.selected_index, None);
    assert_eq!(transition.commit, None);
    assert!(!transition.changed);
}

#[test]
fn test_commit_out_of_range_is_ignored() {
    let mut state = open_state(None);
    let transition = state.apply(SelectCommand::Commit(3), 3);

    assert!(state.is_open);
    assert_eq!(state.selected_index, None);
    assert_eq!(transition, Default::default());
}

#[test]
fn test_commit_target() {
    let state = open_state(Some(1));
    assert_eq!(state.commit_target(SelectCommand::Commit(2), 3), Some(2));
    assert_eq!(state.commit_target(SelectCommand::Commit(3), 3), None);
    assert_eq!(state.commit_target(SelectCommand::CommitHighlighted, 3), Some(1));
    assert_eq!(state.commit_target(SelectCommand::Toggle, 3), None);
}

#[test]
fn test_commit_resolved_always_closes() {
    let mut state = open_state(Some(0));
    let kept = state.apply(SelectCommand::Commit(1), 3);
    assert_eq!(kept.commit, Some(1));

    let mut state = open_state(Some(0));
    let gone = state.commit_resolved(4, 2);

    assert!(!state.is_open);
    assert_eq!(state.selected_index, None);
    assert_eq!(gone.commit, Some(4));
    assert!(gone.closed);
}

#[test]
fn test_default_gap_matches_config() {
    assert_eq!(
        SelectState::default().overlay_gap,
        dse::SelectConfig::default().overlay_gap
    );
}

// ============================================================================
// Anchor offset
// ============================================================================

#[test]
fn test_anchor_offset_tracks_trigger_height() {
    let mut state = SelectState::new(10);
    assert_eq!(state.anchor_offset(), 11);

    let unchanged = state.apply(SelectCommand::TriggerResized { height: 1 }, 3);
    assert!(!unchanged.changed);

    let changed = state.apply(SelectCommand::TriggerResized { height: 3 }, 3);
    assert!(changed.changed);
    assert_eq!(state.anchor_offset(), 13);

    state.apply(SelectCommand::TriggerResized { height: 2 }, 3);
    assert_eq!(state.anchor_offset(), 12);
}

// ============================================================================
// Keymap
// ============================================================================

#[test]
fn test_trigger_keymap() {
    assert_eq!(
        trigger_command(Key::Space),
        Some(SelectCommand::Open { seed_highlight: true })
    );
    assert_eq!(
        trigger_command(Key::Down),
        Some(SelectCommand::Open { seed_highlight: true })
    );
    assert_eq!(
        trigger_command(Key::Up),
        Some(SelectCommand::Open { seed_highlight: false })
    );
    assert_eq!(trigger_command(Key::Enter), None);
    assert_eq!(trigger_command(Key::Char('a')), None);
}

#[test]
fn test_option_keymap() {
    assert_eq!(option_command(Key::Escape), Some(SelectCommand::Close));
    assert_eq!(option_command(Key::Down), Some(SelectCommand::HighlightNext));
    assert_eq!(option_command(Key::Up), Some(SelectCommand::HighlightPrev));
    assert_eq!(option_command(Key::Enter), Some(SelectCommand::CommitHighlighted));
    assert_eq!(option_command(Key::Tab), None);
    assert_eq!(option_command(Key::Space), None);
}

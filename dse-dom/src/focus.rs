use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::element::{find_element, Element};
use crate::event::{Event, Key};
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Tracks the focused and hovered elements and turns raw terminal input into
/// targeted events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    hovered: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Get the element currently under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Drop focus/hover that point at elements no longer in the tree.
    pub fn retain_existing(&mut self, root: &Element) {
        let gone = |id: &Option<String>| {
            id.as_deref()
                .is_some_and(|id| find_element(root, id).is_none())
        };
        if gone(&self.focused) {
            log::debug!("[focus] dropping focus on removed element {:?}", self.focused);
            self.focused = None;
        }
        if gone(&self.hovered) {
            self.hovered = None;
        }
    }

    /// Focus the next focusable element (Tab), wrapping at the end.
    /// Returns the newly focused ID if focus moved.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.cycle(root, true)
    }

    /// Focus the previous focusable element (Shift+Tab), wrapping at the
    /// start. Returns the newly focused ID if focus moved.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.cycle(root, false)
    }

    fn cycle(&mut self, root: &Element, forward: bool) -> Option<String> {
        let order = collect_focusable(root);
        let len = order.len();
        if len == 0 {
            return None;
        }

        let current = self
            .focused
            .as_ref()
            .and_then(|id| order.iter().position(|candidate| candidate == id));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        let id = order[next].clone();
        self.focus(&id).then_some(id)
    }

    /// Move hover to `target`, returning leave/enter events for the change.
    pub fn hover(&mut self, target: Option<String>) -> Vec<Event> {
        if self.hovered == target {
            return Vec::new();
        }
        let leave = self
            .hovered
            .take()
            .map(|target| Event::MouseLeave { target });
        self.hovered = target.clone();
        let enter = target.map(|target| Event::MouseEnter { target });
        leave.into_iter().chain(enter).collect()
    }

    /// Blur/Focus events for a focus change from `old` to `new`.
    fn transfer(old: Option<String>, new: String) -> impl Iterator<Item = Event> {
        old.map(|target| Event::Blur { target })
            .into_iter()
            .chain(std::iter::once(Event::Focus { target: new }))
    }

    /// Turn raw crossterm input into targeted events.
    ///
    /// Tab/BackTab move focus; every other key is addressed to the focused
    /// element. A mouse press focuses the element under it when that element
    /// is focusable, then clicks it.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key) => self.key_events(key, root, &mut events),
                CrosstermEvent::Mouse(mouse) => self.mouse_events(mouse, root, layout, &mut events),
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }
        events
    }

    fn key_events(&mut self, raw: &KeyEvent, root: &Element, events: &mut Vec<Event>) {
        // Some terminals also report releases and repeats.
        if raw.kind != KeyEventKind::Press {
            return;
        }
        let Some(key) = Key::from_code(raw.code) else {
            return;
        };

        if matches!(key, Key::Tab | Key::BackTab) {
            let old = self.focused.clone();
            if let Some(new) = self.cycle(root, key == Key::Tab) {
                events.extend(Self::transfer(old, new));
            }
            return;
        }

        events.push(Event::Key {
            target: self.focused.clone(),
            key,
            modifiers: raw.modifiers.into(),
        });
    }

    fn mouse_events(
        &mut self,
        mouse: &MouseEvent,
        root: &Element,
        layout: &LayoutResult,
        events: &mut Vec<Event>,
    ) {
        match mouse.kind {
            MouseEventKind::Down(button) => {
                let target = hit_test(layout, root, mouse.column, mouse.row);
                let focus_target = target
                    .as_deref()
                    .filter(|id| find_element(root, id).is_some_and(|el| el.focusable));
                if let Some(id) = focus_target {
                    let old = self.focused.clone();
                    if self.focus(id) {
                        events.extend(Self::transfer(old, id.to_string()));
                    }
                }
                events.push(Event::Click {
                    target,
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                });
            }
            MouseEventKind::Moved => {
                let target = hit_test(layout, root, mouse.column, mouse.row);
                events.extend(self.hover(target));
            }
            _ => {}
        }
    }
}

/// IDs of all focusable elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    // tabindex -1: focusable programmatically, skipped by Tab traversal
    if element.focusable && !matches!(element.tab_index, Some(t) if t < 0) {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}

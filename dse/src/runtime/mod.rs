//! Runtime: mounts a component, routes events to its handlers and keeps the
//! element tree, layout and focus in sync.
//!
//! The same runtime drives the terminal playground and the tests. Tests use
//! the query and event helpers (`click`, `key_down`, `get_by_role`, ...)
//! the way a DOM testing library would.

use crossterm::event::Event as CrosstermEvent;
use dse_dom::element::{find_all_by_role, find_by_role, find_by_text, find_element, find_element_mut, path_to};
use dse_dom::{Element, Event, FocusState, Key, LayoutResult, Modifiers, MouseButton, Rect, Role, layout};

use crate::error::{DseError, Result};
use crate::handler::{EventResult, HandlerContext, HandlerRegistry, Request, events};
use crate::select::Select;

const DEFAULT_VIEWPORT: Rect = Rect::new(0, 0, 80, 24);

/// Anything that can build an element tree.
pub trait Component {
    /// Build the tree, registering handlers in `registry`.
    fn element(&self, registry: &HandlerRegistry) -> Element;

    /// Called after each layout pass. Return true when the measurement
    /// changed something that needs another build.
    fn after_layout(&self, _layout: &LayoutResult) -> bool {
        false
    }
}

impl Component for Select {
    fn element(&self, registry: &HandlerRegistry) -> Element {
        Select::element(self, registry)
    }

    fn after_layout(&self, layout: &LayoutResult) -> bool {
        self.sync_layout(layout)
    }
}

pub struct Runtime<C> {
    component: C,
    registry: HandlerRegistry,
    focus: FocusState,
    viewport: Rect,
    root: Element,
    layout: LayoutResult,
}

impl<C: Component> Runtime<C> {
    /// Mount `component` in an 80x24 viewport.
    pub fn new(component: C) -> Self {
        Self::with_viewport(component, DEFAULT_VIEWPORT)
    }

    pub fn with_viewport(component: C, viewport: Rect) -> Self {
        let mut runtime = Self {
            component,
            registry: HandlerRegistry::new(),
            focus: FocusState::new(),
            viewport,
            root: Element::box_(),
            layout: LayoutResult::new(),
        };
        runtime.render();
        runtime
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn focused_element(&self) -> Option<&Element> {
        find_element(&self.root, self.focus.focused()?)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Rebuild the tree and lay it out. A component whose layout feedback
    /// changes its state gets one more build.
    pub fn render(&mut self) {
        self.build();
        if self.component.after_layout(&self.layout) {
            self.build();
        }
    }

    fn build(&mut self) {
        self.registry.clear();
        self.root = self.component.element(&self.registry);
        self.focus.retain_existing(&self.root);
        self.mark_focus();
        self.layout = layout(&self.root, self.viewport);
    }

    fn mark_focus(&mut self) {
        if let Some(id) = self.focus.focused().map(str::to_string)
            && let Some(element) = find_element_mut(&mut self.root, &id)
        {
            element.focused = true;
        }
    }

    /// Move focus to `id` if it is in the current tree.
    pub fn focus(&mut self, id: &str) -> bool {
        if find_element(&self.root, id).is_none() {
            log::debug!("[runtime] focus target {id} not in tree");
            return false;
        }
        let changed = self.focus.focus(id);
        if changed {
            self.clear_focus_marks();
            self.mark_focus();
        }
        changed
    }

    fn clear_focus_marks(&mut self) {
        fn clear(element: &mut Element) {
            element.focused = false;
            if let dse_dom::Content::Children(children) = &mut element.content {
                children.iter_mut().for_each(clear);
            }
        }
        clear(&mut self.root);
    }

    // -------------------------------------------------------------------------
    // Event dispatch
    // -------------------------------------------------------------------------

    /// Deliver one event, re-render, then apply focus requests.
    pub fn dispatch(&mut self, event: Event) -> EventResult {
        log::debug!("[runtime] dispatch {event:?}");

        let (result, requests) = match &event {
            Event::Key { target: Some(target), .. } => self.bubble(target, events::KEY_DOWN, &event),
            Event::Click { target: Some(target), .. } => {
                let target = target.clone();
                if find_element(&self.root, &target).is_some_and(|el| el.focusable) {
                    self.focus.focus(&target);
                }
                self.bubble(&target, events::CLICK, &event)
            }
            Event::MouseEnter { target } => self.invoke(target, events::MOUSE_ENTER, &event),
            Event::MouseLeave { target } => self.invoke(target, events::MOUSE_LEAVE, &event),
            Event::Focus { target } => {
                self.focus.focus(target);
                (EventResult::Consumed, Vec::new())
            }
            Event::Blur { target } => {
                if self.focus.focused() == Some(target.as_str()) {
                    self.focus.blur();
                }
                (EventResult::Consumed, Vec::new())
            }
            Event::Resize { width, height } => {
                self.viewport = Rect::from_size(*width, *height);
                (EventResult::Consumed, Vec::new())
            }
            Event::Key { target: None, .. } | Event::Click { target: None, .. } => {
                (EventResult::Ignored, Vec::new())
            }
        };

        self.render();
        for request in requests {
            match request {
                Request::Focus(id) => {
                    self.focus(&id);
                }
            }
        }

        result
    }

    /// Run the target's handler, then its ancestors', until one consumes.
    fn bubble(&self, target: &str, event_name: &str, event: &Event) -> (EventResult, Vec<Request>) {
        let path: Vec<String> = path_to(&self.root, target)
            .map(|path| path.iter().rev().map(|el| el.id.clone()).collect())
            .unwrap_or_default();

        for id in path {
            let (result, requests) = self.invoke(&id, event_name, event);
            if result.is_consumed() {
                return (result, requests);
            }
        }
        (EventResult::Ignored, Vec::new())
    }

    fn invoke(&self, id: &str, event_name: &str, event: &Event) -> (EventResult, Vec<Request>) {
        let Some(handler) = self.registry.get(id, event_name) else {
            return (EventResult::Ignored, Vec::new());
        };
        let hx = HandlerContext::new(event);
        handler(&hx);
        let result = if hx.is_consumed() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        };
        (result, hx.into_requests())
    }

    /// Translate raw terminal input and dispatch the resulting events.
    pub fn handle_raw(&mut self, raw: &[CrosstermEvent]) -> Vec<(Event, EventResult)> {
        let events = self.focus.process_events(raw, &self.root, &self.layout);
        events
            .into_iter()
            .map(|event| {
                let result = self.dispatch(event.clone());
                (event, result)
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Event helpers
    // -------------------------------------------------------------------------

    /// Click the element `id` at its top-left cell.
    pub fn click(&mut self, id: &str) -> EventResult {
        let (x, y) = self
            .layout
            .get(id)
            .map(|rect| (rect.x, rect.y))
            .unwrap_or_default();
        self.dispatch(Event::Click {
            target: Some(id.to_string()),
            x,
            y,
            button: MouseButton::Left,
        })
    }

    /// Press `key` with the element `id` as target.
    pub fn key_down(&mut self, id: &str, key: Key) -> EventResult {
        self.dispatch(Event::Key {
            target: Some(id.to_string()),
            key,
            modifiers: Modifiers::NONE,
        })
    }

    /// Press `key` on whatever has focus.
    pub fn press(&mut self, key: Key) -> EventResult {
        let target = self.focus.focused().map(str::to_string);
        self.dispatch(Event::Key {
            target,
            key,
            modifiers: Modifiers::NONE,
        })
    }

    pub fn mouse_enter(&mut self, id: &str) -> EventResult {
        self.dispatch(Event::MouseEnter {
            target: id.to_string(),
        })
    }

    pub fn mouse_leave(&mut self, id: &str) -> EventResult {
        self.dispatch(Event::MouseLeave {
            target: id.to_string(),
        })
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn query_by_role(&self, role: Role) -> Option<&Element> {
        find_by_role(&self.root, role)
    }

    pub fn get_by_role(&self, role: Role) -> Result<&Element> {
        self.query_by_role(role)
            .ok_or_else(|| DseError::ElementNotFound(format!("role {}", role.as_str())))
    }

    pub fn get_all_by_role(&self, role: Role) -> Vec<&Element> {
        find_all_by_role(&self.root, role)
    }

    pub fn query_by_text(&self, text: &str) -> Option<&Element> {
        find_by_text(&self.root, text)
    }

    pub fn get_by_text(&self, text: &str) -> Result<&Element> {
        self.query_by_text(text)
            .ok_or_else(|| DseError::ElementNotFound(format!("text {text:?}")))
    }
}

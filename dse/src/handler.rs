//! Event handlers and the registry that binds them to elements.
//!
//! This module provides:
//! - `Handler`: closure type for element event handlers
//! - `HandlerContext`: what a handler sees while it runs
//! - `HandlerRegistry`: handlers keyed by (element_id, event)
//!
//! Components register handlers while building their element tree. The
//! runtime clears the registry before every build, so handlers from a
//! previous render never outlive the elements they were bound to.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use dse_dom::{Event, Key, Modifiers};

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives a HandlerContext.
///
/// The closure captures whatever component handle it acts on at creation
/// time.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler(f: impl Fn(&HandlerContext) + Send + Sync + 'static) -> Handler {
    Arc::new(f)
}

/// Standard event names.
pub mod events {
    pub const CLICK: &str = "on_click";
    pub const KEY_DOWN: &str = "on_key_down";
    pub const MOUSE_ENTER: &str = "on_mouse_enter";
    pub const MOUSE_LEAVE: &str = "on_mouse_leave";
}

// =============================================================================
// Event Result
// =============================================================================

/// Whether an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// A handler took the event; default handling is suppressed.
    Consumed,
    /// Nobody handled it; the host may apply its default behaviour.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Side effects a handler asks the runtime to perform once the new tree has
/// been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Focus the element with this ID, if it exists after re-render.
    Focus(String),
}

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to every handler.
///
/// Handlers consume their event unless they call [`ignore`](Self::ignore),
/// in which case the runtime keeps bubbling it to ancestors.
pub struct HandlerContext<'a> {
    event: &'a Event,
    consumed: Cell<bool>,
    requests: RefCell<Vec<Request>>,
}

impl<'a> HandlerContext<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self {
            event,
            consumed: Cell::new(true),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// The event being handled.
    pub fn event(&self) -> &Event {
        self.event
    }

    /// The pressed key, for key events.
    pub fn key(&self) -> Option<Key> {
        match self.event {
            Event::Key { key, .. } => Some(*key),
            _ => None,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self.event {
            Event::Key { modifiers, .. } => *modifiers,
            _ => Modifiers::NONE,
        }
    }

    /// Leave the event unhandled so it keeps propagating.
    pub fn ignore(&self) {
        self.consumed.set(false);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Ask the runtime to move focus after the next render.
    pub fn focus(&self, id: impl Into<String>) {
        self.requests.borrow_mut().push(Request::Focus(id.into()));
    }

    /// Requests issued so far, in order.
    pub fn into_requests(self) -> Vec<Request> {
        self.requests.into_inner()
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event) to handler closures. Cheap to clone; clones
/// share the same table.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}

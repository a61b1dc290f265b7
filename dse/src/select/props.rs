//! Recommended props for option elements.

use dse_dom::{Element, Role};

use crate::handler::{Handler, HandlerRegistry, events};

/// Everything an option element needs to behave like a select option:
/// accessibility attributes, classes, tab order, its focus handle and the
/// handlers that drive the select.
#[derive(Clone)]
pub struct OptionProps {
    pub role: Role,
    pub aria_label: String,
    /// `Some(true)` for the committed option, absent otherwise.
    pub aria_checked: Option<bool>,
    pub class_name: String,
    pub tab_index: i32,
    /// Element ID the select moves focus to while this option is highlighted.
    pub focus_handle: String,
    pub on_click: Handler,
    pub on_key_down: Handler,
    pub on_mouse_enter: Handler,
    pub on_mouse_leave: Handler,
}

/// Caller-supplied replacements for individual [`OptionProps`] fields.
/// Any field left `None` keeps the recommended value.
#[derive(Clone, Default)]
pub struct OptionPropsOverride {
    pub role: Option<Role>,
    pub aria_label: Option<String>,
    pub aria_checked: Option<Option<bool>>,
    pub class_name: Option<String>,
    pub tab_index: Option<i32>,
    pub focus_handle: Option<String>,
    pub on_click: Option<Handler>,
    pub on_key_down: Option<Handler>,
    pub on_mouse_enter: Option<Handler>,
    pub on_mouse_leave: Option<Handler>,
}

impl OptionPropsOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn aria_checked(mut self, checked: Option<bool>) -> Self {
        self.aria_checked = Some(checked);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Replace the option's element ID. Focus moves requested by the select
    /// still target the recommended handle, so an option bound under another
    /// ID is reachable by pointer but not by arrow-key focus.
    pub fn focus_handle(mut self, handle: impl Into<String>) -> Self {
        self.focus_handle = Some(handle.into());
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn on_key_down(mut self, handler: Handler) -> Self {
        self.on_key_down = Some(handler);
        self
    }

    pub fn on_mouse_enter(mut self, handler: Handler) -> Self {
        self.on_mouse_enter = Some(handler);
        self
    }

    pub fn on_mouse_leave(mut self, handler: Handler) -> Self {
        self.on_mouse_leave = Some(handler);
        self
    }
}

impl OptionProps {
    /// Layer `overrides` on top of these props. Overridden fields win.
    pub fn merge(self, overrides: OptionPropsOverride) -> Self {
        Self {
            role: overrides.role.unwrap_or(self.role),
            aria_label: overrides.aria_label.unwrap_or(self.aria_label),
            aria_checked: overrides.aria_checked.unwrap_or(self.aria_checked),
            class_name: overrides.class_name.unwrap_or(self.class_name),
            tab_index: overrides.tab_index.unwrap_or(self.tab_index),
            focus_handle: overrides.focus_handle.unwrap_or(self.focus_handle),
            on_click: overrides.on_click.unwrap_or(self.on_click),
            on_key_down: overrides.on_key_down.unwrap_or(self.on_key_down),
            on_mouse_enter: overrides.on_mouse_enter.unwrap_or(self.on_mouse_enter),
            on_mouse_leave: overrides.on_mouse_leave.unwrap_or(self.on_mouse_leave),
        }
    }

    /// Apply the props to `element` and register its handlers.
    ///
    /// The element takes the focus handle as its ID, so it replaces whatever
    /// ID the element was built with.
    pub fn bind(&self, element: Element, registry: &HandlerRegistry) -> Element {
        let id = &self.focus_handle;
        registry.register(id, events::CLICK, self.on_click.clone());
        registry.register(id, events::KEY_DOWN, self.on_key_down.clone());
        registry.register(id, events::MOUSE_ENTER, self.on_mouse_enter.clone());
        registry.register(id, events::MOUSE_LEAVE, self.on_mouse_leave.clone());

        element
            .id(id)
            .role(self.role)
            .aria_label(&self.aria_label)
            .aria_checked(self.aria_checked)
            .class(&self.class_name)
            .tab_index(self.tab_index)
            .focusable(true)
            .clickable(true)
    }
}

impl std::fmt::Debug for OptionProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionProps")
            .field("role", &self.role)
            .field("aria_label", &self.aria_label)
            .field("aria_checked", &self.aria_checked)
            .field("class_name", &self.class_name)
            .field("tab_index", &self.tab_index)
            .field("focus_handle", &self.focus_handle)
            .finish_non_exhaustive()
    }
}

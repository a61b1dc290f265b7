//! Select - a dropdown for picking one option.
//!
//! A trigger button shows the committed option (or a fallback label) and
//! toggles an overlay listing every option. Options can be highlighted with
//! the arrow keys or the pointer and committed with Enter or a click.

mod command;
pub mod keymap;
mod option;
mod props;
mod render;
mod state;

pub use command::SelectCommand;
pub use option::SelectOption;
pub use props::{OptionProps, OptionPropsOverride};
pub use render::{DefaultOptionRenderer, OptionRenderProps, OptionRenderer};
pub use state::{SelectState, Transition};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use dse_dom::{Color, Element, HasPopup, LayoutResult, Position, Role, Style};

use crate::atoms::Text;
use crate::config::SelectConfig;
use crate::error::{DseError, Result};
use crate::handler::{Handler, HandlerContext, HandlerRegistry, events, handler};

/// Called with the committed option and its index.
pub type Observer = Arc<dyn Fn(&SelectOption, usize) + Send + Sync>;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectId(String);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(format!("select-{}", COUNTER.fetch_add(1, Ordering::SeqCst)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

struct SelectInner {
    state: SelectState,
    options: Vec<SelectOption>,
    label: Option<String>,
    config: SelectConfig,
    on_option_select: Option<Observer>,
    renderer: Option<Arc<dyn OptionRenderer>>,
    /// Bumped whenever the number of options changes, so focus handles from
    /// an older list never match the new one.
    generation: u64,
}

/// Dropdown select with shared, interior state.
///
/// Cloning is cheap and every clone refers to the same select, which is how
/// the handlers registered in [`element`](Self::element) reach it.
///
/// # Example
///
/// ```ignore
/// let select = Select::new([("Apple", "apple"), ("Pear", "pear")])
///     .label("Pick a fruit")
///     .on_option_select(|option, index| log::info!("{} at {index}", option.label));
/// ```
#[derive(Clone)]
pub struct Select {
    id: SelectId,
    inner: Arc<RwLock<SelectInner>>,
    dirty: Arc<AtomicBool>,
}

impl Select {
    pub fn new<O: Into<SelectOption>>(options: impl IntoIterator<Item = O>) -> Self {
        let config = SelectConfig::default();
        Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner {
                state: SelectState::new(config.overlay_gap),
                options: options.into_iter().map(Into::into).collect(),
                label: None,
                config,
                on_option_select: None,
                renderer: None,
                generation: 0,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Use a fixed element ID instead of a generated one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = SelectId(id.into());
        self
    }

    /// Trigger text shown while nothing is selected.
    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.label = Some(label.into());
        }
        self
    }

    pub fn on_option_select(
        self,
        observer: impl Fn(&SelectOption, usize) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.on_option_select = Some(Arc::new(observer));
        }
        self
    }

    /// Replace the default option renderer.
    pub fn render_option(self, renderer: impl OptionRenderer + 'static) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.renderer = Some(Arc::new(renderer));
        }
        self
    }

    pub fn config(self, config: SelectConfig) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.state.overlay_gap = config.overlay_gap;
            inner.config = config;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn select_id(&self) -> &SelectId {
        &self.id
    }

    /// Element ID of the trigger button.
    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    /// Element ID of the overlay, present only while open.
    pub fn overlay_id(&self) -> String {
        format!("{}-overlay", self.id)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SelectState {
        self.inner
            .read()
            .map(|inner| inner.state.clone())
            .unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state().selected_index
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.state().highlighted_index
    }

    pub fn anchor_offset(&self) -> u16 {
        self.state().anchor_offset()
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.inner
            .read()
            .map(|inner| inner.options.clone())
            .unwrap_or_default()
    }

    pub fn selected_option(&self) -> Option<SelectOption> {
        let inner = self.inner.read().ok()?;
        inner
            .state
            .selected_index
            .and_then(|index| inner.options.get(index).cloned())
    }

    /// Text the trigger shows: the selected label, else the caller's label,
    /// else the configured fallback.
    pub fn display_label(&self) -> String {
        self.inner
            .read()
            .map(|inner| display_label(&inner))
            .unwrap_or_default()
    }

    /// Element ID of the option at `index` for the current list.
    pub fn option_handle(&self, index: usize) -> Option<String> {
        let inner = self.inner.read().ok()?;
        (index < inner.options.len())
            .then(|| format!("{}-option-{}-{index}", self.id, inner.generation))
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Run one command through the state machine.
    ///
    /// For commits the observer runs first, without any lock held, and sees
    /// the select as it was before the commit.
    pub fn dispatch(&self, command: SelectCommand) -> Transition {
        // Resolved once: the observer may replace the options before the
        // write lock is taken, and the commit must match what it was told.
        let resolved = self.inner.read().ok().and_then(|inner| {
            let index = inner.state.commit_target(command, inner.options.len())?;
            let option = inner.options.get(index)?.clone();
            Some((index, option, inner.on_option_select.clone()))
        });
        if let Some((index, option, Some(observer))) = &resolved {
            observer(option, *index);
        }

        let Ok(mut inner) = self.inner.write() else {
            return Transition::default();
        };
        let len = inner.options.len();
        let transition = match resolved {
            Some((index, ..)) => inner.state.commit_resolved(index, len),
            None => inner.state.apply(command, len),
        };
        if transition.changed {
            self.dirty.store(true, Ordering::SeqCst);
        }

        log::debug!(
            "[select] {} {command:?} -> open={} highlighted={:?} selected={:?}",
            self.id,
            inner.state.is_open,
            inner.state.highlighted_index,
            inner.state.selected_index
        );

        transition
    }

    /// Commit `index` programmatically, as if the user had clicked it.
    pub fn select(&self, index: usize) -> Result<Transition> {
        let len = self.inner.read().map(|inner| inner.options.len()).unwrap_or(0);
        if index >= len {
            return Err(DseError::OptionIndexOutOfRange { index, len });
        }
        Ok(self.dispatch(SelectCommand::Commit(index)))
    }

    /// Replace the options. A different collection clears selection and
    /// highlight; a different length also regenerates focus handles.
    pub fn set_options<O: Into<SelectOption>>(&self, options: impl IntoIterator<Item = O>) {
        let options: Vec<SelectOption> = options.into_iter().map(Into::into).collect();
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if inner.options == options {
            return;
        }

        if inner.options.len() != options.len() {
            inner.generation += 1;
        }
        inner.state.reset_indices();
        inner.options = options;
        self.dirty.store(true, Ordering::SeqCst);

        log::debug!(
            "[select] {} options replaced, {} now (generation {})",
            self.id,
            inner.options.len(),
            inner.generation
        );
    }

    /// Feed back the measured trigger height. Returns true if the anchor
    /// offset changed.
    pub fn sync_layout(&self, layout: &LayoutResult) -> bool {
        let Some(rect) = layout.get(&self.trigger_id()) else {
            return false;
        };
        self.dispatch(SelectCommand::TriggerResized {
            height: rect.height,
        })
        .changed
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the element tree and register its handlers.
    pub fn element(&self, registry: &HandlerRegistry) -> Element {
        let Ok(inner) = self.inner.read() else {
            return Element::col().id(self.id.as_str());
        };
        let state = inner.state.clone();
        let options = inner.options.clone();
        let label = display_label(&inner);
        let renderer = inner.renderer.clone();
        drop(inner);

        log::debug!(
            "[select] build {} open={} options={}",
            self.id,
            state.is_open,
            options.len()
        );

        let root = Element::col()
            .id(self.id.as_str())
            .class("dse-select")
            .child(self.trigger(&label, state.is_open, registry));

        if !state.is_open {
            return root;
        }

        let default_renderer = DefaultOptionRenderer;
        let renderer: &dyn OptionRenderer = match &renderer {
            Some(custom) => custom.as_ref(),
            None => &default_renderer,
        };

        let items = options.iter().enumerate().map(|(index, option)| {
            let is_selected = state.selected_index == Some(index);
            let is_highlighted = state.highlighted_index == Some(index);
            let recommended = self.recommended_props(index, option, is_selected, is_highlighted);
            let props = OptionRenderProps::new(
                option,
                index,
                is_selected,
                is_highlighted,
                recommended,
                registry,
            );
            renderer.render(&props)
        });

        let overlay = Element::col()
            .id(self.overlay_id())
            .role(Role::Listbox)
            .class("dse-select__overlay")
            .position(Position::Absolute)
            .top(state.anchor_offset())
            .z_index(100)
            .style(Style::new().background(Color::var("surface")))
            .children(items.collect::<Vec<_>>());

        root.child(overlay)
    }

    fn trigger(&self, label: &str, is_open: bool, registry: &HandlerRegistry) -> Element {
        let id = self.trigger_id();

        let select = self.clone();
        registry.register(
            &id,
            events::CLICK,
            handler(move |hx| select.run(SelectCommand::Toggle, hx)),
        );

        let select = self.clone();
        registry.register(
            &id,
            events::KEY_DOWN,
            handler(move |hx| match hx.key().and_then(keymap::trigger_command) {
                Some(command) => select.run(command, hx),
                None => hx.ignore(),
            }),
        );

        let caret_state = if is_open { "open" } else { "closed" };
        let caret = Element::text(if is_open { "▲" } else { "▼" })
            .class(&format!("dse-select__caret dse-select__caret--{caret_state}"));

        Element::row()
            .id(&id)
            .role(Role::Button)
            .aria_haspopup(HasPopup::Listbox)
            .aria_expanded(is_open)
            .class("dse-select__label")
            .gap(1)
            .focusable(true)
            .clickable(true)
            .style_focused(Style::new().underline())
            .child(Text::new(label).element())
            .child(caret)
    }

    fn recommended_props(
        &self,
        index: usize,
        option: &SelectOption,
        is_selected: bool,
        is_highlighted: bool,
    ) -> OptionProps {
        let mut class_name = String::from("dse-select__option");
        if is_selected {
            class_name.push_str(" dse-select__option--selected");
        }
        if is_highlighted {
            class_name.push_str(" dse-select__option--highlighted");
        }

        OptionProps {
            role: Role::MenuItemRadio,
            aria_label: option.label.clone(),
            aria_checked: is_selected.then_some(true),
            class_name,
            tab_index: if is_highlighted { -1 } else { 0 },
            focus_handle: self.option_handle(index).unwrap_or_default(),
            on_click: self.command_handler(SelectCommand::Commit(index)),
            on_key_down: {
                let select = self.clone();
                handler(move |hx| match hx.key().and_then(keymap::option_command) {
                    Some(command) => select.run(command, hx),
                    None => hx.ignore(),
                })
            },
            on_mouse_enter: self.command_handler(SelectCommand::Highlight(Some(index))),
            on_mouse_leave: self.command_handler(SelectCommand::Highlight(None)),
        }
    }

    fn command_handler(&self, command: SelectCommand) -> Handler {
        let select = self.clone();
        handler(move |hx| select.run(command, hx))
    }

    /// Dispatch from a handler and turn the transition into focus requests.
    fn run(&self, command: SelectCommand, hx: &HandlerContext) {
        let transition = self.dispatch(command);
        if let Some(handle) = transition.focus.and_then(|index| self.option_handle(index)) {
            hx.focus(handle);
        } else if transition.closed {
            hx.focus(self.trigger_id());
        }
    }
}

fn display_label(inner: &SelectInner) -> String {
    inner
        .state
        .selected_index
        .and_then(|index| inner.options.get(index))
        .map(|option| option.label.clone())
        .or_else(|| inner.label.clone())
        .unwrap_or_else(|| inner.config.fallback_label.clone())
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("options", &self.options().len())
            .finish()
    }
}

use dse_dom::{Color, Edges, Element, Key, Role, Style};

use crate::handler::{Handler, HandlerRegistry, events, handler};

/// A push button. Unmodified Enter and Space activate it like a click.
#[derive(Clone)]
pub struct Button {
    id: Option<String>,
    label: String,
    on_click: Option<Handler>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            on_click: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn element(&self, registry: &HandlerRegistry) -> Element {
        let mut element = Element::text(&self.label)
            .role(Role::Button)
            .class("dse-btn-container")
            .padding(Edges::symmetric(0, 1))
            .style(Style::new().background(Color::var("primary")))
            .style_focused(Style::new().bold().underline())
            .focusable(true)
            .clickable(true);
        if let Some(id) = &self.id {
            element = element.id(id);
        }

        if let Some(on_click) = &self.on_click {
            registry.register(&element.id, events::CLICK, on_click.clone());

            let activate = on_click.clone();
            registry.register(
                &element.id,
                events::KEY_DOWN,
                handler(move |hx| match hx.key() {
                    Some(Key::Enter | Key::Space) if hx.modifiers().is_empty() => activate(hx),
                    _ => hx.ignore(),
                }),
            );
        }

        element
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

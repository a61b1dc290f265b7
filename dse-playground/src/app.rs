//! The playground screen: every atom plus one select.

use dse::handler::handler;
use dse::{Button, ColorSwatch, Component, HandlerRegistry, Margin, Select, Text};
use dse_dom::{Color, Edges, Element, LayoutResult, Style};
use dse_foundation::{FontSize, Spacing};

use crate::config::PlaygroundConfig;

pub struct App {
    select: Select,
    button: Button,
    swatch: Element,
}

impl App {
    /// Build the screen from `config`. Fails on an unparsable swatch colour.
    pub fn new(config: &PlaygroundConfig) -> dse::Result<Self> {
        let swatch = ColorSwatch::new(&config.swatch.hex_code)
            .width(config.swatch.width)
            .height(config.swatch.height)
            .element()?;

        let select = Select::new(config.options.clone())
            .id("playground-select")
            .label(&config.label)
            .config(config.select.clone())
            .on_option_select(|option, index| {
                log::info!(
                    "[playground] option selected: {} ({}) at {index}",
                    option.label,
                    option.value
                );
            });

        let button = Button::new("Hello i am button")
            .id("playground-button")
            .on_click(handler(|_| log::info!("[playground] button clicked")));

        Ok(Self {
            select,
            button,
            swatch,
        })
    }

    pub fn select(&self) -> &Select {
        &self.select
    }

    /// Whether the select changed since the last call. Clears the flag.
    pub fn take_dirty(&self) -> bool {
        let dirty = self.select.is_dirty();
        self.select.clear_dirty();
        dirty
    }
}

impl Component for App {
    fn element(&self, registry: &HandlerRegistry) -> Element {
        Element::col()
            .id("playground")
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .style(Style::new().background(Color::var("background")))
            .child(Text::new("Design system playground").size(FontSize::Xl).element())
            .child(self.button.element(registry))
            .child(self.swatch.clone())
            .child(
                Margin::new()
                    .space(Spacing::Xs)
                    .child(self.select.element(registry))
                    .element(),
            )
            .child(
                Text::new("Tab moves focus. q or Ctrl+C quits.")
                    .size(FontSize::Sm)
                    .element(),
            )
    }

    fn after_layout(&self, layout: &LayoutResult) -> bool {
        self.select.sync_layout(layout)
    }
}

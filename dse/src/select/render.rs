//! Per-option rendering.
//!
//! The select hands each option to an [`OptionRenderer`] together with an
//! [`OptionRenderProps`] capability object. Renderers decide what the option
//! looks like; binding the recommended props is what makes it behave like an
//! option. A renderer that skips [`OptionRenderProps::bind`] gets a purely
//! visual element with no select behaviour.

use dse_dom::{Color, Element, Role, Style};

use super::SelectOption;
use super::props::{OptionProps, OptionPropsOverride};
use crate::atoms::Text;
use crate::handler::HandlerRegistry;

/// What a renderer gets for one option.
pub struct OptionRenderProps<'a> {
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub option: &'a SelectOption,
    pub index: usize,
    recommended: OptionProps,
    registry: &'a HandlerRegistry,
}

impl<'a> OptionRenderProps<'a> {
    pub(crate) fn new(
        option: &'a SelectOption,
        index: usize,
        is_selected: bool,
        is_highlighted: bool,
        recommended: OptionProps,
        registry: &'a HandlerRegistry,
    ) -> Self {
        Self {
            is_selected,
            is_highlighted,
            option,
            index,
            recommended,
            registry,
        }
    }

    /// The recommended props with `overrides` applied.
    pub fn recommended_props(&self, overrides: OptionPropsOverride) -> OptionProps {
        self.recommended.clone().merge(overrides)
    }

    /// Bind the recommended props (with `overrides`) to `element`.
    pub fn bind(&self, element: Element, overrides: OptionPropsOverride) -> Element {
        self.recommended_props(overrides)
            .bind(element, self.registry)
    }
}

/// Renders one option. Closures taking `&OptionRenderProps` implement it.
pub trait OptionRenderer: Send + Sync {
    fn render(&self, props: &OptionRenderProps<'_>) -> Element;
}

impl<F> OptionRenderer for F
where
    F: Fn(&OptionRenderProps<'_>) -> Element + Send + Sync,
{
    fn render(&self, props: &OptionRenderProps<'_>) -> Element {
        self(props)
    }
}

/// Label text plus a checkmark on the committed option.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptionRenderer;

impl OptionRenderer for DefaultOptionRenderer {
    fn render(&self, props: &OptionRenderProps<'_>) -> Element {
        let mut style = Style::new();
        if props.is_highlighted {
            style = style.background(Color::var("highlight"));
        }
        if props.is_selected {
            style = style.foreground(Color::var("selected"));
        }

        let mut row = Element::row()
            .gap(1)
            .style(style)
            .child(Text::new(&props.option.label).element());
        if props.is_selected {
            row = row.child(
                Element::text("✓")
                    .role(Role::Presentation)
                    .class("dse-select__check"),
            );
        }

        props.bind(row, OptionPropsOverride::default())
    }
}

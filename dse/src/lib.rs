//! dse: design-system components rendered into a `dse_dom` element tree.
//!
//! Stateless atoms ([`Text`], [`Button`], [`ColorSwatch`], [`Margin`]) build
//! elements directly. The [`Select`] molecule owns its interaction state
//! behind a clonable handle and registers its event handlers in a
//! [`HandlerRegistry`] each time it is built. [`Runtime`] mounts any
//! [`Component`], routes events to those handlers and re-renders.

pub mod atoms;
pub mod config;
pub mod error;
pub mod handler;
pub mod prelude;
pub mod runtime;
pub mod select;

pub use atoms::{Button, ColorSwatch, Margin, Text};
pub use config::SelectConfig;
pub use error::{DseError, Result};
pub use handler::{EventResult, Handler, HandlerContext, HandlerRegistry, Request};
pub use runtime::{Component, Runtime};
pub use select::{
    DefaultOptionRenderer, OptionProps, OptionPropsOverride, OptionRenderProps, OptionRenderer,
    Select, SelectCommand, SelectOption, SelectState, Transition,
};

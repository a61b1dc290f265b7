//! Prelude module for convenient imports.
//!
//! ```ignore
//! use dse::prelude::*;
//! ```

pub use crate::atoms::{Button, ColorSwatch, Margin, Text};
pub use crate::config::SelectConfig;
pub use crate::error::DseError;
pub use crate::handler::{EventResult, Handler, HandlerContext, HandlerRegistry};
pub use crate::runtime::{Component, Runtime};
pub use crate::select::{
    OptionPropsOverride, OptionRenderProps, OptionRenderer, Select, SelectOption,
};

pub use dse_dom::{Element, Key, Role};
pub use dse_foundation::{DefaultTheme, FontSize, Spacing};

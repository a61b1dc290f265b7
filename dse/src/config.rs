//! Component configuration.

use serde::{Deserialize, Serialize};

/// Rows between trigger and overlay unless configured otherwise.
pub const DEFAULT_OVERLAY_GAP: u16 = 10;

/// Per-instance configuration for [`Select`](crate::Select).
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Rows between the bottom of the trigger and the top of the overlay.
    pub overlay_gap: u16,

    /// Trigger text when nothing is selected and no label was given.
    pub fallback_label: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            overlay_gap: DEFAULT_OVERLAY_GAP,
            fallback_label: "Select option".to_string(),
        }
    }
}

impl SelectConfig {
    pub fn overlay_gap(mut self, gap: u16) -> Self {
        self.overlay_gap = gap;
        self
    }

    pub fn fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = label.into();
        self
    }
}

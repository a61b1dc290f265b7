use super::Rgb;

/// A theme provides named colour variables.
pub trait Theme: Send + Sync {
    /// Resolve a colour variable name. Returns None if it is not defined.
    fn resolve(&self, name: &str) -> Option<Rgb>;
}

/// Theme that resolves nothing; variables fall back to terminal defaults.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<Rgb> {
        None
    }
}

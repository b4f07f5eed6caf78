//! Theme struct for building token collections.

use indexmap::IndexMap;

use super::mode::ThemeMode;

/// Name of the theme that applies at the document root, without any
/// attribute qualifier.
pub const DEFAULT_THEME: &str = "default";

/// A named collection of design tokens.
///
/// Tokens keep their declaration order, which is also the order their
/// custom properties are emitted in.
///
/// # Example
///
/// ```rust
/// use lumen_tokens::{Theme, ThemeMode};
///
/// let theme = Theme::new("dark")
///     .with_mode(ThemeMode::Dark)
///     .add("surface", "#101010")
///     .add("accent", "#4ade80");
///
/// assert_eq!(theme.get("accent"), Some("#4ade80"));
/// assert!(theme.mode().is_dark());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    mode: ThemeMode,
    tokens: IndexMap<String, String>,
}

impl Theme {
    /// Creates a light theme without tokens.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ThemeMode::default(),
            tokens: IndexMap::new(),
        }
    }

    /// Sets the theme mode, returning the updated theme for chaining.
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Adds a token, returning the updated theme for chaining.
    ///
    /// Re-adding an existing name replaces its value in place; the token
    /// keeps its original position.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    pub(crate) fn from_parts(
        name: String,
        mode: ThemeMode,
        tokens: IndexMap<String, String>,
    ) -> Self {
        Self { name, mode, tokens }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Looks up a token's literal value.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    /// Iterates tokens in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether this is the root-scoped default theme.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_THEME
    }
}

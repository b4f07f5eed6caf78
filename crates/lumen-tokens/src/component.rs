//! Components and their per-theme style variants.

use indexmap::IndexMap;

/// Ordered mapping of property name to raw value.
///
/// Raw values are either literals (`"#e6e6e6"`) or a single whole-value
/// token reference (`"{green-500}"`).
pub type StyleMap = IndexMap<String, String>;

/// A named style preset of a component, with one [`StyleMap`] per theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variant {
    styles: IndexMap<String, StyleMap>,
}

impl Variant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property for one theme, returning the updated variant for chaining.
    pub fn set(
        mut self,
        theme: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.styles
            .entry(theme.into())
            .or_default()
            .insert(property.into(), value.into());
        self
    }

    /// Styles for `theme`, if the variant declares any.
    pub fn styles(&self, theme: &str) -> Option<&StyleMap> {
        self.styles.get(theme)
    }

    /// Theme names this variant carries styles for, in declaration order.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl From<IndexMap<String, StyleMap>> for Variant {
    fn from(styles: IndexMap<String, StyleMap>) -> Self {
        Self { styles }
    }
}

/// A named component owning an ordered set of variants.
///
/// # Example
///
/// ```rust
/// use lumen_tokens::{Component, Variant};
///
/// let button = Component::new("button")
///     .variant("success", Variant::new().set("default", "bg", "#e6e6e6"))
///     .variant("danger", Variant::new().set("default", "bg", "{red-500}"));
///
/// let names: Vec<&str> = button.variants().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["success", "danger"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    variants: IndexMap<String, Variant>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: IndexMap::new(),
        }
    }

    /// Adds a variant, returning the updated component for chaining.
    pub fn variant(mut self, name: impl Into<String>, variant: Variant) -> Self {
        self.variants.insert(name.into(), variant);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates variants in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v))
    }
}

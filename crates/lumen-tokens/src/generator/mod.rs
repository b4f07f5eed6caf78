//! Pluggable declaration generators and their dispatch.
//!
//! A [`Generator`] derives extra declarations from one component property.
//! It is keyed by an exact component name and a [`Matcher`] over the
//! property name, and is a pure function of the resolved value and the
//! active [`Theme`].
//!
//! # Dispatch
//!
//! For every property of a component style map, [`GeneratorRegistry::dispatch`]:
//!
//! 1. Emits the base declaration `--lds-<property>`, always. Generators
//!    augment a property; they never replace it.
//! 2. Runs every matching generator in registration order, handing each the
//!    value resolved in generator-input mode (references become the token's
//!    literal value), and appends what each returns in its own order.
//!
//! No deduplication happens. When two declarations share a name, the
//! stylesheet cascade picks the later one.
//!
//! # Example
//!
//! ```rust
//! use lumen_tokens::{Declaration, Generator, GeneratorRegistry, RawValue, Theme};
//!
//! let registry = GeneratorRegistry::new().register(Generator::new(
//!     "card",
//!     "*",
//!     |value, _theme| Ok(vec![Declaration::new("--lds-card-seen", value)]),
//! ));
//!
//! let theme = Theme::new("default");
//! let declarations = registry
//!     .dispatch("card", "radius", RawValue::parse("4px"), &theme)
//!     .unwrap();
//!
//! assert_eq!(declarations[0], Declaration::new("--lds-radius", "4px"));
//! assert_eq!(declarations[1], Declaration::new("--lds-card-seen", "4px"));
//! ```

pub mod shade;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::emit::Declaration;
use crate::error::GenerateError;
use crate::reference::RawValue;
use crate::selector::NAMESPACE;
use crate::theme::Theme;

/// Matches property names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Exact(String),
    /// Matches every property (`"*"`).
    Any,
}

impl Matcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Exact(expected) => expected == name,
            Matcher::Any => true,
        }
    }
}

impl From<&str> for Matcher {
    fn from(pattern: &str) -> Self {
        if pattern == "*" {
            Matcher::Any
        } else {
            Matcher::Exact(pattern.to_string())
        }
    }
}

impl From<String> for Matcher {
    fn from(pattern: String) -> Self {
        if pattern == "*" {
            Matcher::Any
        } else {
            Matcher::Exact(pattern)
        }
    }
}

/// Type-erased generator function: `(resolved value, theme) → declarations`.
pub type GenerateFn =
    Arc<dyn Fn(&str, &Theme) -> Result<Vec<Declaration>, GenerateError> + Send + Sync>;

/// A generator bound to a component and a property matcher.
#[derive(Clone)]
pub struct Generator {
    component: String,
    property: Matcher,
    run: GenerateFn,
}

impl Generator {
    pub fn new<F>(component: impl Into<String>, property: impl Into<Matcher>, run: F) -> Self
    where
        F: Fn(&str, &Theme) -> Result<Vec<Declaration>, GenerateError> + Send + Sync + 'static,
    {
        Self {
            component: component.into(),
            property: property.into(),
            run: Arc::new(run),
        }
    }

    pub fn matches(&self, component: &str, property: &str) -> bool {
        self.component == component && self.property.matches(property)
    }

    pub fn run(&self, value: &str, theme: &Theme) -> Result<Vec<Declaration>, GenerateError> {
        (self.run)(value, theme)
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn property(&self) -> &Matcher {
        &self.property
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("component", &self.component)
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of generators.
///
/// [`GeneratorRegistry::new`] is empty; [`GeneratorRegistry::default`]
/// carries the built-in [shade generator](shade) for `button` / `bg`.
#[derive(Debug, Clone)]
pub struct GeneratorRegistry {
    generators: Vec<Generator>,
}

impl GeneratorRegistry {
    /// Creates a registry with no generators.
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Appends a generator, returning the updated registry for chaining.
    pub fn register(mut self, generator: Generator) -> Self {
        self.generators.push(generator);
        self
    }

    pub fn push(&mut self, generator: Generator) {
        self.generators.push(generator);
    }

    /// Generators matching `component` / `property`, in registration order.
    pub fn matching<'a>(
        &'a self,
        component: &'a str,
        property: &'a str,
    ) -> impl Iterator<Item = &'a Generator> + 'a {
        self.generators
            .iter()
            .filter(move |g| g.matches(component, property))
    }

    /// Builds the declarations for one property: the base declaration
    /// followed by the output of every matching generator.
    pub fn dispatch(
        &self,
        component: &str,
        property: &str,
        value: RawValue<'_>,
        theme: &Theme,
    ) -> Result<Vec<Declaration>, GenerateError> {
        let mut declarations = vec![Declaration::new(
            format!("--{}-{}", NAMESPACE, property),
            value.to_css(),
        )];

        let mut matching = self.matching(component, property).peekable();
        if matching.peek().is_none() {
            return Ok(declarations);
        }

        let input = value.resolve(theme)?;
        for generator in matching {
            trace!(
                component,
                property,
                theme = theme.name(),
                input,
                "running generator"
            );
            declarations.extend(generator.run(input, theme)?);
        }
        Ok(declarations)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new().register(shade::generator("button", "bg"))
    }
}

//! Selector construction for theme and component rules.
//!
//! | Rule | `default` theme | any other theme |
//! |------|-----------------|-----------------|
//! | theme | `:root` | `[data-theme="dark"]` |
//! | component | `.lds-button.success` | `[data-theme="dark"] .lds-button.success` |
//!
//! Attribute values are serialized as CSS strings and class names as CSS
//! identifiers, so names with quotes or leading digits stay valid.

use std::fmt::{self, Write};

use cssparser::{serialize_identifier, serialize_string};

use crate::config::Options;
use crate::theme::Theme;

/// Class and custom-property namespace (`.lds-button`, `--lds-bg`).
pub const NAMESPACE: &str = "lds";

/// Builds selectors according to [`Options`].
#[derive(Debug, Clone, Copy)]
pub struct SelectorBuilder<'a> {
    options: &'a Options,
}

impl<'a> SelectorBuilder<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Selector for the rule holding a theme's tokens.
    pub fn theme(&self, theme: &Theme) -> String {
        if theme.is_default() {
            self.options.root_selector.clone()
        } else {
            self.scope(theme.name()).to_string()
        }
    }

    /// Selector for one component variant under one theme.
    pub fn component(&self, theme: &Theme, component: &str, variant: &str) -> String {
        let target = VariantClasses { component, variant };
        if theme.is_default() {
            target.to_string()
        } else {
            format!("{} {}", self.scope(theme.name()), target)
        }
    }

    fn scope<'t>(&self, theme: &'t str) -> ThemeScope<'t>
    where
        'a: 't,
    {
        ThemeScope {
            attribute: &self.options.theme_attribute,
            theme,
        }
    }
}

struct ThemeScope<'t> {
    attribute: &'t str,
    theme: &'t str,
}

impl fmt::Display for ThemeScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        serialize_identifier(self.attribute, f)?;
        f.write_char('=')?;
        serialize_string(self.theme, f)?;
        f.write_char(']')
    }
}

struct VariantClasses<'t> {
    component: &'t str,
    variant: &'t str,
}

impl fmt::Display for VariantClasses<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('.')?;
        serialize_identifier(&format!("{}-{}", NAMESPACE, self.component), f)?;
        f.write_char('.')?;
        serialize_identifier(self.variant, f)
    }
}

//! Configuration: themes, components and output options.
//!
//! A [`Config`] is built either with the builder API or deserialized from
//! YAML or JSON. Map order in the source document is preserved and
//! determines emission order.
//!
//! ```yaml
//! themes:
//!   default:
//!     tokens:
//!       green-500: "#22c55e"
//!   dark:
//!     mode: dark
//!     tokens:
//!       green-500: "#16a34a"
//! components:
//!   button:
//!     success:
//!       default: { bg: "{green-500}" }
//!       dark: { bg: "{green-500}" }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::component::{Component, StyleMap, Variant};
use crate::error::{ConfigError, GenerateError};
use crate::theme::{Theme, ThemeMode};

/// Selector settings shared by every generated rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Selector for the `default` theme. Defaults to `:root`.
    pub root_selector: String,
    /// Attribute that activates a named theme. Defaults to `data-theme`.
    pub theme_attribute: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_selector: ":root".to_string(),
            theme_attribute: "data-theme".to_string(),
        }
    }
}

/// The complete input of a generation pass.
///
/// # Example
///
/// ```rust
/// use lumen_tokens::Config;
///
/// let config = Config::from_yaml(r##"
/// themes:
///   default:
///     tokens: { primary: "#000000" }
///   dark:
///     mode: dark
/// "##).unwrap();
///
/// let names: Vec<&str> = config.themes().map(|t| t.name()).collect();
/// assert_eq!(names, vec!["default", "dark"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    options: Options,
    themes: IndexMap<String, Theme>,
    components: IndexMap<String, Component>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Adds a theme, returning the updated config for chaining.
    ///
    /// A theme with the same name replaces the earlier one in place.
    pub fn add_theme(mut self, theme: Theme) -> Self {
        self.themes.insert(theme.name().to_string(), theme);
        self
    }

    /// Adds a component, returning the updated config for chaining.
    pub fn add_component(mut self, component: Component) -> Self {
        self.components.insert(component.name().to_string(), component);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Iterates themes in declaration order.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Iterates components in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Checks that every theme named inside a component variant is declared.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for component in self.components() {
            for (variant_name, variant) in component.variants() {
                let undeclared = variant.themes().find(|t| !self.themes.contains_key(*t));
                if let Some(theme) = undeclared {
                    return Err(GenerateError::UnknownTheme {
                        component: component.name().to_string(),
                        variant: variant_name.to_string(),
                        theme: theme.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// On-disk shape of a configuration document.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    options: Options,
    #[serde(default)]
    themes: IndexMap<String, ThemeFile>,
    #[serde(default)]
    components: IndexMap<String, IndexMap<String, IndexMap<String, StyleMap>>>,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    mode: ThemeMode,
    tokens: IndexMap<String, String>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let themes = file
            .themes
            .into_iter()
            .map(|(name, theme)| {
                let built = Theme::from_parts(name.clone(), theme.mode, theme.tokens);
                (name, built)
            })
            .collect();

        let components = file
            .components
            .into_iter()
            .map(|(name, variants)| {
                let component = variants.into_iter().fold(
                    Component::new(name.clone()),
                    |component, (variant, styles)| component.variant(variant, Variant::from(styles)),
                );
                (name, component)
            })
            .collect();

        Config {
            options: file.options,
            themes,
            components,
        }
    }
}

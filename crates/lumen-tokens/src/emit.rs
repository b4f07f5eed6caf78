//! Rule generation: themes first, then every component variant per theme.
//!
//! # Emission order
//!
//! The order is externally observable and fully determined by the
//! configuration and the generator registry:
//!
//! 1. One [`RuleKind::Theme`] rule per theme, in theme declaration order,
//!    holding `--<token>` declarations in token declaration order.
//! 2. One [`RuleKind::Component`] rule per (component, variant, theme),
//!    iterating components, then their variants, then the declared themes,
//!    each in declaration order. A variant without styles for some theme
//!    still gets an (empty) rule for it.
//!
//! Within a component rule, every property of the style map is dispatched
//! through the [`GeneratorRegistry`] in style map order.

use std::fmt;

use tracing::{debug, warn};

use crate::component::Component;
use crate::config::Config;
use crate::error::GenerateError;
use crate::generator::GeneratorRegistry;
use crate::reference::RawValue;
use crate::selector::SelectorBuilder;
use crate::theme::Theme;

/// A custom-property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    value: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Which marker directive a rule answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Theme,
    Component,
}

/// A selector and its declarations, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
    pub kind: RuleKind,
}

/// Renders the rule as CSS text, one declaration per line.
///
/// An empty rule renders on a single line: `:root {}`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.declarations.is_empty() {
            return write!(f, "{} {{}}", self.selector);
        }
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "    {};", declaration)?;
        }
        f.write_str("}")
    }
}

/// A recoverable issue found during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A value with brace syntax that isn't a whole-value reference. It was
    /// emitted as a literal.
    MalformedReference {
        selector: String,
        property: String,
        value: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MalformedReference {
                selector,
                property,
                value,
            } => write!(
                f,
                "{}: property '{}' has malformed reference '{}', emitted as a literal",
                selector, property, value
            ),
        }
    }
}

/// The output of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub rules: Vec<Rule>,
    pub warnings: Vec<Warning>,
}

impl Generated {
    /// Rules of one kind, in emission order.
    pub fn rules_of(&self, kind: RuleKind) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |rule| rule.kind == kind)
    }
}

/// Drives selector construction, value resolution and generator dispatch
/// over a whole configuration.
pub struct DeclarationEmitter<'a> {
    config: &'a Config,
    registry: &'a GeneratorRegistry,
    selectors: SelectorBuilder<'a>,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(config: &'a Config, registry: &'a GeneratorRegistry) -> Self {
        Self {
            config,
            registry,
            selectors: SelectorBuilder::new(config.options()),
        }
    }

    /// Runs one full pass. Any [`GenerateError`] aborts it.
    pub fn emit(&self) -> Result<Generated, GenerateError> {
        self.config.validate()?;

        let mut generated = Generated::default();
        for theme in self.config.themes() {
            generated.rules.push(self.theme_rule(theme));
        }
        for component in self.config.components() {
            self.component_rules(component, &mut generated)?;
        }
        Ok(generated)
    }

    fn theme_rule(&self, theme: &Theme) -> Rule {
        let selector = self.selectors.theme(theme);
        let declarations: Vec<Declaration> = theme
            .tokens()
            .map(|(name, value)| Declaration::new(format!("--{}", name), value))
            .collect();
        debug!(%selector, tokens = declarations.len(), "emitted theme rule");

        Rule {
            selector,
            declarations,
            kind: RuleKind::Theme,
        }
    }

    fn component_rules(
        &self,
        component: &Component,
        generated: &mut Generated,
    ) -> Result<(), GenerateError> {
        for (variant_name, variant) in component.variants() {
            for theme in self.config.themes() {
                let selector =
                    self.selectors.component(theme, component.name(), variant_name);
                let mut declarations = Vec::new();

                for (property, raw) in variant.styles(theme.name()).into_iter().flatten() {
                    let value = RawValue::try_parse(raw).unwrap_or_else(|malformed| {
                        warn!(%selector, property = property.as_str(), "{}", malformed);
                        generated.warnings.push(Warning::MalformedReference {
                            selector: selector.clone(),
                            property: property.clone(),
                            value: malformed.value,
                        });
                        RawValue::Literal(raw)
                    });
                    declarations.extend(self.registry.dispatch(
                        component.name(),
                        property,
                        value,
                        theme,
                    )?);
                }

                debug!(%selector, declarations = declarations.len(), "emitted component rule");
                generated.rules.push(Rule {
                    selector,
                    declarations,
                    kind: RuleKind::Component,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Variant;
    use crate::generator::Generator;
    use crate::theme::ThemeMode;

    fn two_themes() -> Config {
        Config::new()
            .add_theme(Theme::new("default"))
            .add_theme(Theme::new("dark").with_mode(ThemeMode::Dark))
    }

    #[test]
    fn test_themes_without_tokens() {
        let config = two_themes();
        let generated = DeclarationEmitter::new(&config, &GeneratorRegistry::default())
            .emit()
            .unwrap();

        assert_eq!(generated.rules.len(), 2);
        assert_eq!(generated.rules[0].selector, ":root");
        assert_eq!(generated.rules[1].selector, r#"[data-theme="dark"]"#);
        assert!(generated.rules.iter().all(|r| r.declarations.is_empty()));
        assert!(generated.rules.iter().all(|r| r.kind == RuleKind::Theme));
    }

    #[test]
    fn test_tokens_become_custom_properties() {
        let config = Config::new().add_theme(
            Theme::new("default")
                .add("primary", "#000000")
                .add("secondary", "#ffffff"),
        );
        let generated = DeclarationEmitter::new(&config, &GeneratorRegistry::new())
            .emit()
            .unwrap();

        assert_eq!(
            generated.rules[0].declarations,
            vec![
                Declaration::new("--primary", "#000000"),
                Declaration::new("--secondary", "#ffffff"),
            ]
        );
    }

    #[test]
    fn test_component_iteration_order() {
        let config = two_themes()
            .add_component(
                Component::new("button")
                    .variant("success", Variant::new())
                    .variant("danger", Variant::new()),
            )
            .add_component(Component::new("badge").variant("info", Variant::new()));
        let generated = DeclarationEmitter::new(&config, &GeneratorRegistry::new())
            .emit()
            .unwrap();

        let selectors: Vec<&str> = generated
            .rules_of(RuleKind::Component)
            .map(|r| r.selector.as_str())
            .collect();
        assert_eq!(
            selectors,
            vec![
                ".lds-button.success",
                r#"[data-theme="dark"] .lds-button.success"#,
                ".lds-button.danger",
                r#"[data-theme="dark"] .lds-button.danger"#,
                ".lds-badge.info",
                r#"[data-theme="dark"] .lds-badge.info"#,
            ]
        );
    }

    #[test]
    fn test_variant_themes_follow_theme_declaration_order() {
        let config = two_themes().add_component(
            Component::new("button").variant(
                "success",
                Variant::new()
                    .set("dark", "fg", "#fff")
                    .set("default", "fg", "#000"),
            ),
        );
        let generated = DeclarationEmitter::new(&config, &GeneratorRegistry::new())
            .emit()
            .unwrap();

        let rules: Vec<&Rule> = generated.rules_of(RuleKind::Component).collect();
        assert_eq!(rules[0].selector, ".lds-button.success");
        assert_eq!(rules[0].declarations, vec![Declaration::new("--lds-fg", "#000")]);
        assert_eq!(rules[1].declarations, vec![Declaration::new("--lds-fg", "#fff")]);
    }

    #[test]
    fn test_properties_keep_style_map_order() {
        let config = Config::new().add_theme(Theme::new("default")).add_component(
            Component::new("card").variant(
                "plain",
                Variant::new()
                    .set("default", "radius", "4px")
                    .set("default", "shadow", "none")
                    .set("default", "gap", "{space-2}"),
            ),
        );
        let generated = DeclarationEmitter::new(&config, &GeneratorRegistry::default())
            .emit()
            .unwrap();

        assert_eq!(
            generated.rules[1].declarations,
            vec![
                Declaration::new("--lds-radius", "4px"),
                Declaration::new("--lds-shadow", "none"),
                Declaration::new("--lds-gap", "var(--space-2)"),
            ]
        );
    }

    #[test]
    fn test_malformed_reference_is_a_warning() {
        let config = Config::new().add_theme(Theme::new("default")).add_component(
            Component::new("card").variant(
                "plain",
                Variant::new().set("default", "border", "1px solid {line}"),
            ),
        );
        let generated = DeclarationEmitter::new(&config, &GeneratorRegistry::new())
            .emit()
            .unwrap();

        assert_eq!(
            generated.rules[1].declarations,
            vec![Declaration::new("--lds-border", "1px solid {line}")]
        );
        assert_eq!(
            generated.warnings,
            vec![Warning::MalformedReference {
                selector: ".lds-card.plain".to_string(),
                property: "border".to_string(),
                value: "1px solid {line}".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_token_aborts_pass() {
        let config = Config::new().add_theme(Theme::new("default")).add_component(
            Component::new("button")
                .variant("success", Variant::new().set("default", "bg", "{green-500}")),
        );
        let result = DeclarationEmitter::new(&config, &GeneratorRegistry::default()).emit();

        assert_eq!(
            result,
            Err(GenerateError::UnknownToken {
                token: "green-500".to_string(),
                theme: "default".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_color_aborts_pass() {
        let config = Config::new().add_theme(Theme::new("default")).add_component(
            Component::new("button").variant("success", Variant::new().set("default", "bg", "12px")),
        );
        let result = DeclarationEmitter::new(&config, &GeneratorRegistry::default()).emit();
        assert!(matches!(result, Err(GenerateError::InvalidColor { .. })));
    }

    #[test]
    fn test_unknown_theme_aborts_pass() {
        let config = Config::new().add_theme(Theme::new("default")).add_component(
            Component::new("button").variant("success", Variant::new().set("brand", "bg", "#000")),
        );
        let result = DeclarationEmitter::new(&config, &GeneratorRegistry::new()).emit();
        assert!(matches!(result, Err(GenerateError::UnknownTheme { .. })));
    }

    #[test]
    fn test_custom_generator_follows_base_declaration() {
        let registry = GeneratorRegistry::new().register(Generator::new("button", "bg", |value, _| {
            Ok(vec![
                Declaration::new("--lds-bg-copy", value),
                Declaration::new("--lds-bg-twice", format!("{value} {value}")),
            ])
        }));
        let config = Config::new()
            .add_theme(Theme::new("default").add("brand", "#abcdef"))
            .add_component(
                Component::new("button")
                    .variant("success", Variant::new().set("default", "bg", "{brand}")),
            );
        let generated = DeclarationEmitter::new(&config, &registry).emit().unwrap();

        assert_eq!(
            generated.rules[1].declarations,
            vec![
                Declaration::new("--lds-bg", "var(--brand)"),
                Declaration::new("--lds-bg-copy", "#abcdef"),
                Declaration::new("--lds-bg-twice", "#abcdef #abcdef"),
            ]
        );
    }

    #[test]
    fn test_rule_display() {
        let empty = Rule {
            selector: ":root".to_string(),
            declarations: vec![],
            kind: RuleKind::Theme,
        };
        assert_eq!(empty.to_string(), ":root {}");

        let rule = Rule {
            selector: ".lds-button.success".to_string(),
            declarations: vec![
                Declaration::new("--lds-bg", "#000000"),
                Declaration::new("--lds-fg", "#ffffff"),
            ],
            kind: RuleKind::Component,
        };
        assert_eq!(
            rule.to_string(),
            ".lds-button.success {\n    --lds-bg: #000000;\n    --lds-fg: #ffffff;\n}"
        );
    }
}

//! # lumen-tokens: design themes as CSS custom properties
//!
//! Turns a declarative theme configuration into a deterministic list of
//! CSS custom-property rules. Components reference the emitted variables;
//! switching themes means activating a different scoping selector.
//!
//! # Concepts
//!
//! - **Theme**: a named, light or dark set of tokens. The `default` theme is
//!   scoped to `:root`, every other one to `[data-theme="<name>"]`.
//! - **Component / Variant**: per-theme style maps, emitted as
//!   `--lds-<property>` under `.lds-<component>.<variant>`.
//! - **Reference**: a whole value of the form `{token}`. Emitted as
//!   `var(--token)`; generators receive the token's literal value instead.
//! - **Generator**: derives extra declarations from one property. The
//!   built-in [shade generator](generator::shade) turns `button` / `bg` into
//!   seven border, hover and active colors.
//!
//! # Pipeline
//!
//! ```text
//! Config + GeneratorRegistry
//!     │
//!     ▼
//! emit.rs:      themes → components × variants × themes
//!     │            ├─ selector.rs:  scope and class selectors
//!     │            ├─ reference.rs: literal or {token}
//!     │            └─ generator/:   base declaration + generator output
//!     ▼
//! Generated { rules, warnings }
//!     │
//!     ▼
//! document.rs:  DocumentWalker removes markers, appends rules
//! ```
//!
//! # Example
//!
//! ```rust
//! use lumen_tokens::{generate, Config, GeneratorRegistry};
//!
//! let config = Config::from_yaml(r##"
//! themes:
//!   default: {}
//!   dark: { mode: dark }
//! components:
//!   button:
//!     success:
//!       default: { bg: "#e6e6e6" }
//! "##).unwrap();
//!
//! let generated = generate(&config, &GeneratorRegistry::default()).unwrap();
//! let css: Vec<String> = generated.rules.iter().map(|r| r.to_string()).collect();
//!
//! assert_eq!(css[0], ":root {}");
//! assert_eq!(css[1], r#"[data-theme="dark"] {}"#);
//! assert!(css[2].starts_with(".lds-button.success {\n    --lds-bg: #e6e6e6;\n"));
//! assert_eq!(css[3], r#"[data-theme="dark"] .lds-button.success {}"#);
//! ```
//!
//! # Errors
//!
//! Malformed references (`"{oops"`) are recoverable: the value is emitted
//! as written and a [`Warning`] is recorded. Unknown tokens needed by a
//! generator, invalid colors and undeclared themes abort the pass with a
//! [`GenerateError`].

pub mod color;
pub mod component;
pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod generator;
pub mod reference;
pub mod selector;
pub mod theme;

pub use component::{Component, StyleMap, Variant};
pub use config::{Config, Options};
pub use document::{apply, DocumentWalker, Marker};
pub use emit::{Declaration, DeclarationEmitter, Generated, Rule, RuleKind, Warning};
pub use error::{ConfigError, GenerateError, MalformedReference};
pub use generator::{Generator, GeneratorRegistry, Matcher};
pub use reference::RawValue;
pub use selector::SelectorBuilder;
pub use theme::{Theme, ThemeMode, DEFAULT_THEME};

/// Runs one generation pass over `config`.
///
/// The pass is pure: the same config and registry always produce the same
/// rules, byte for byte.
pub fn generate(
    config: &Config,
    registry: &GeneratorRegistry,
) -> Result<Generated, GenerateError> {
    DeclarationEmitter::new(config, registry).emit()
}

/// Generates rules and hands them to `document`.
///
/// Returns the warnings collected during generation. On error the document
/// is left untouched.
pub fn process<W: DocumentWalker + ?Sized>(
    document: &mut W,
    config: &Config,
    registry: &GeneratorRegistry,
) -> Result<Vec<Warning>, GenerateError> {
    let generated = generate(config, registry)?;
    apply(document, &generated);
    Ok(generated.warnings)
}

//! # lumen-stylesheet: `@lumen` marker expansion for CSS source
//!
//! A [`DocumentWalker`] over plain CSS text. It finds the `@lumen themes;`
//! and `@lumen components;` directives, at top level or nested in blocks,
//! cuts them out and appends the generated rules at the end of the
//! stylesheet.
//!
//! # Example
//!
//! ```rust
//! use lumen_stylesheet::process;
//! use lumen_tokens::{Config, GeneratorRegistry};
//!
//! let config = Config::from_yaml("themes:\n  default: {}\n  dark: {}\n").unwrap();
//! let processed = process(
//!     "@lumen themes;\n@lumen components;\n",
//!     &config,
//!     &GeneratorRegistry::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(processed.css, ":root {}\n[data-theme=\"dark\"] {}");
//! ```

mod sheet;

pub use sheet::Stylesheet;

use lumen_tokens::{Config, DocumentWalker, GenerateError, GeneratorRegistry, Warning};

/// Result of [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub css: String,
    pub warnings: Vec<Warning>,
}

/// Expands the markers in `css` with rules generated from `config`.
pub fn process(
    css: &str,
    config: &Config,
    registry: &GeneratorRegistry,
) -> Result<Processed, GenerateError> {
    let mut sheet = Stylesheet::parse(css);
    tracing::debug!(markers = ?sheet.markers(), "parsed stylesheet");

    let warnings = lumen_tokens::process(&mut sheet, config, registry)?;
    Ok(Processed {
        css: sheet.to_css(),
        warnings,
    })
}

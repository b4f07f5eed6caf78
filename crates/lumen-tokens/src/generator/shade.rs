//! Built-in interactive-state shade generator.
//!
//! Authors supply one background color per theme; this generator derives
//! the border, hover and active colors from it. Each shade moves the base
//! lightness by a fixed fraction, computed from the base color every time
//! (offsets never compound):
//!
//! | Shade | Offset |
//! |-------|--------|
//! | `borderPrimary` | 0.10 |
//! | `borderSecondary` | 0.20 |
//! | `bg_hover` | 0.25 |
//! | `borderPrimary_hover` | 0.30 |
//! | `borderSecondary_hover` | 0.40 |
//! | `bg_active` | 0.15 |
//! | `borderPrimary_active` | 0.20 |
//!
//! Light themes darken (`L × (1 − f)`), dark themes lighten
//! (`L + f × (100 − L)`). Hue and saturation are kept.

use crate::color::Hsla;
use crate::emit::Declaration;
use crate::error::GenerateError;
use crate::selector::NAMESPACE;
use crate::theme::{Theme, ThemeMode};

use super::Generator;

/// Shade names and lightness offsets, in emission order.
pub const SHADES: [(&str, f64); 7] = [
    ("borderPrimary", 0.10),
    ("borderSecondary", 0.20),
    ("bg_hover", 0.25),
    ("borderPrimary_hover", 0.30),
    ("borderSecondary_hover", 0.40),
    ("bg_active", 0.15),
    ("borderPrimary_active", 0.20),
];

/// A shade generator bound to `component` / `property`.
pub fn generator(component: &str, property: &str) -> Generator {
    Generator::new(component, property, |value: &str, theme: &Theme| {
        shades(value, theme.mode())
    })
}

/// Derives the seven `--lds-<shade>-preset` declarations from `base`.
///
/// # Example
///
/// ```rust
/// use lumen_tokens::generator::shade::shades;
/// use lumen_tokens::ThemeMode;
///
/// let declarations = shades("#e6e6e6", ThemeMode::Light).unwrap();
/// assert_eq!(declarations.len(), 7);
/// assert_eq!(declarations[0].name(), "--lds-borderPrimary-preset");
/// assert_eq!(declarations[0].value(), "hsl(0, 0%, 81.2%)");
/// ```
pub fn shades(base: &str, mode: ThemeMode) -> Result<Vec<Declaration>, GenerateError> {
    let color = Hsla::parse(base)?;
    Ok(SHADES
        .iter()
        .map(|&(shade, offset)| {
            let derived = match mode {
                ThemeMode::Light => color.darken(offset),
                ThemeMode::Dark => color.lighten(offset),
            };
            Declaration::new(
                format!("--{}-{}-preset", NAMESPACE, shade),
                derived.to_string(),
            )
        })
        .collect())
}

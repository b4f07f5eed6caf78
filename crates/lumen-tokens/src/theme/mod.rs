//! Themes: named, mode-tagged sets of design tokens.
//!
//! This module provides:
//!
//! - [`Theme`]: A named token collection with a fluent builder API
//! - [`ThemeMode`]: Light or dark mode, which steers derived shades
//!
//! Every theme becomes one custom-property scope in the generated CSS.
//! The theme named [`DEFAULT_THEME`] is scoped to the document root.

mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::ThemeMode;
pub use theme::{Theme, DEFAULT_THEME};

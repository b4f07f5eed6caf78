//! Errors raised while loading configuration and generating rules.
//!
//! Two severities exist:
//!
//! - [`MalformedReference`] is recoverable. The value is emitted as a literal
//!   and the issue is reported as a [`Warning`](crate::Warning).
//! - [`GenerateError`] aborts the generation pass. No partial output is
//!   produced.

use thiserror::Error;

/// A value that uses brace syntax but is not a single whole-value reference.
///
/// Examples: `"{primary"`, `"1px solid {border}"`, `"{}"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed token reference '{value}' (treated as a literal)")]
pub struct MalformedReference {
    pub value: String,
}

/// Error returned when a generation pass cannot complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A `{name}` reference names a token the active theme doesn't define.
    #[error("reference to unknown token '{token}' in theme '{theme}'")]
    UnknownToken { token: String, theme: String },

    /// A generator was handed something that isn't a CSS color.
    #[error("invalid color specification '{value}'")]
    InvalidColor { value: String },

    /// A component variant carries styles for a theme that was never declared.
    #[error("component '{component}' variant '{variant}' styles undeclared theme '{theme}'")]
    UnknownTheme {
        component: String,
        variant: String,
        theme: String,
    },

    /// A registered generator failed for a reason of its own.
    #[error("generator failed: {message}")]
    Generator { message: String },
}

/// Error returned when a configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] GenerateError),
}

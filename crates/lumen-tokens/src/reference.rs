//! Classification and resolution of raw style values.
//!
//! A raw value is either a literal CSS value or a reference to a theme
//! token. A reference must occupy the entire value: `"{green-500}"` is a
//! reference, `"1px solid {border}"` is not.
//!
//! References resolve two ways:
//!
//! | Mode | Literal | `{name}` |
//! |------|---------|----------|
//! | [`to_css`](RawValue::to_css) (direct emission) | unchanged | `var(--name)` |
//! | [`resolve`](RawValue::resolve) (generator input) | unchanged | the token's value |
//!
//! Resolution is a single hop. A token whose value itself looks like a
//! reference is returned as written.

use std::borrow::Cow;

use crate::error::{GenerateError, MalformedReference};
use crate::theme::Theme;

/// A parsed raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    Literal(&'a str),
    /// Token name, without braces.
    Reference(&'a str),
}

impl<'a> RawValue<'a> {
    /// Classifies `raw`, reporting brace syntax that isn't a valid reference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen_tokens::RawValue;
    ///
    /// assert_eq!(RawValue::try_parse("{green-500}"), Ok(RawValue::Reference("green-500")));
    /// assert_eq!(RawValue::try_parse("#fff"), Ok(RawValue::Literal("#fff")));
    /// assert!(RawValue::try_parse("{green-500").is_err());
    /// ```
    pub fn try_parse(raw: &'a str) -> Result<Self, MalformedReference> {
        if let Some(name) = raw
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            if is_token_name(name) {
                return Ok(RawValue::Reference(name));
            }
        }

        if raw.contains(['{', '}']) {
            return Err(MalformedReference {
                value: raw.to_string(),
            });
        }

        Ok(RawValue::Literal(raw))
    }

    /// Classifies `raw`, folding malformed references into literals.
    pub fn parse(raw: &'a str) -> Self {
        Self::try_parse(raw).unwrap_or(RawValue::Literal(raw))
    }

    /// Value for direct emission into a declaration.
    pub fn to_css(&self) -> Cow<'a, str> {
        match *self {
            RawValue::Literal(value) => Cow::Borrowed(value),
            RawValue::Reference(name) => Cow::Owned(format!("var(--{})", name)),
        }
    }

    /// Value handed to generators: references are looked up in `theme`.
    pub fn resolve<'t>(&self, theme: &'t Theme) -> Result<&'t str, GenerateError>
    where
        'a: 't,
    {
        match *self {
            RawValue::Literal(value) => Ok(value),
            RawValue::Reference(name) => {
                theme
                    .get(name)
                    .ok_or_else(|| GenerateError::UnknownToken {
                        token: name.to_string(),
                        theme: theme.name().to_string(),
                    })
            }
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, RawValue::Reference(_))
    }
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

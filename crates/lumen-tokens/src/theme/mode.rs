//! Light/dark theme mode.

use serde::Deserialize;

/// Whether a theme renders on a light or a dark surface.
///
/// Generators use the mode to decide which direction derived colors move:
/// shades darken on light themes and lighten on dark ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: ThemeMode = serde_json::from_str(r#""dark""#).unwrap();
        assert_eq!(mode, ThemeMode::Dark);

        let mode: ThemeMode = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_mode_rejects_unknown_value() {
        assert!(serde_json::from_str::<ThemeMode>(r#""dim""#).is_err());
    }
}

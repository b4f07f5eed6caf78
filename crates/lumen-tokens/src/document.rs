//! The seam between generation and the host stylesheet.
//!
//! A host stylesheet asks for generated rules with two marker directives:
//!
//! ```css
//! @lumen themes;
//! @lumen components;
//! ```
//!
//! A [`DocumentWalker`] owns the document: it reports which markers are
//! present, removes them, and inserts rules. [`apply`] drives a walker with
//! the output of a generation pass.

use crate::emit::{Generated, Rule, RuleKind};

/// A marker directive in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `@lumen themes;`
    Themes,
    /// `@lumen components;`
    Components,
}

impl Marker {
    /// At-rule name shared by both markers.
    pub const AT_RULE: &'static str = "lumen";

    /// Parses the marker parameter (`themes` / `components`).
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "themes" => Some(Marker::Themes),
            "components" => Some(Marker::Components),
            _ => None,
        }
    }

    /// The kind of rule this marker asks for.
    pub fn rule_kind(self) -> RuleKind {
        match self {
            Marker::Themes => RuleKind::Theme,
            Marker::Components => RuleKind::Component,
        }
    }
}

/// A document that can receive generated rules.
pub trait DocumentWalker {
    /// Markers present in the document, in document order.
    fn markers(&self) -> Vec<Marker>;

    /// Removes every occurrence of `marker`.
    fn remove_marker(&mut self, marker: Marker);

    /// Appends rules to the end of the document, in the given order.
    fn append_rules(&mut self, rules: &[Rule]);
}

/// Hands generated rules to a document.
///
/// Each marker found is removed and replaced by the rules of its kind,
/// appended in marker order. A marker listed twice is handled once. Rules
/// whose marker is absent are not inserted.
pub fn apply<W: DocumentWalker + ?Sized>(document: &mut W, generated: &Generated) {
    let mut handled = Vec::new();
    for marker in document.markers() {
        if handled.contains(&marker) {
            continue;
        }
        handled.push(marker);

        document.remove_marker(marker);
        let rules: Vec<Rule> = generated.rules_of(marker.rule_kind()).cloned().collect();
        tracing::debug!(?marker, rules = rules.len(), "expanding marker");
        document.append_rules(&rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Declaration;

    /// Records calls instead of editing text.
    #[derive(Default)]
    struct Recorder {
        markers: Vec<Marker>,
        removed: Vec<Marker>,
        appended: Vec<String>,
    }

    impl DocumentWalker for Recorder {
        fn markers(&self) -> Vec<Marker> {
            self.markers.clone()
        }

        fn remove_marker(&mut self, marker: Marker) {
            self.markers.retain(|m| *m != marker);
            self.removed.push(marker);
        }

        fn append_rules(&mut self, rules: &[Rule]) {
            self.appended
                .extend(rules.iter().map(|r| r.selector.clone()));
        }
    }

    fn generated() -> Generated {
        let rule = |selector: &str, kind| Rule {
            selector: selector.to_string(),
            declarations: vec![Declaration::new("--x", "1")],
            kind,
        };
        Generated {
            rules: vec![
                rule(":root", RuleKind::Theme),
                rule("[data-theme=\"dark\"]", RuleKind::Theme),
                rule(".lds-button.success", RuleKind::Component),
            ],
            warnings: vec![],
        }
    }

    #[test]
    fn test_marker_from_param() {
        assert_eq!(Marker::from_param("themes"), Some(Marker::Themes));
        assert_eq!(Marker::from_param("components"), Some(Marker::Components));
        assert_eq!(Marker::from_param("tokens"), None);
    }

    #[test]
    fn test_apply_both_markers() {
        let mut doc = Recorder {
            markers: vec![Marker::Themes, Marker::Components],
            ..Default::default()
        };
        apply(&mut doc, &generated());

        assert_eq!(doc.removed, vec![Marker::Themes, Marker::Components]);
        assert_eq!(
            doc.appended,
            vec![":root", "[data-theme=\"dark\"]", ".lds-button.success"]
        );
    }

    #[test]
    fn test_apply_follows_marker_order() {
        let mut doc = Recorder {
            markers: vec![Marker::Components, Marker::Themes],
            ..Default::default()
        };
        apply(&mut doc, &generated());

        assert_eq!(doc.appended[0], ".lds-button.success");
        assert_eq!(doc.appended[1], ":root");
    }

    #[test]
    fn test_apply_only_present_markers() {
        let mut doc = Recorder {
            markers: vec![Marker::Themes, Marker::Themes],
            ..Default::default()
        };
        apply(&mut doc, &generated());

        assert_eq!(doc.removed, vec![Marker::Themes]);
        assert_eq!(doc.appended.len(), 2);
    }

    #[test]
    fn test_apply_without_markers_is_noop() {
        let mut doc = Recorder::default();
        apply(&mut doc, &generated());
        assert!(doc.removed.is_empty());
        assert!(doc.appended.is_empty());
    }
}

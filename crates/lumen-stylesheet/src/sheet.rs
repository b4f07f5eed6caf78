//! CSS source with marker directives located by byte range.

use std::fmt::Write;
use std::ops::Range;

use cssparser::{ParseError, Parser, ParserInput, Token};
use lumen_tokens::{DocumentWalker, Marker, Rule};
use tracing::debug;

/// A stylesheet whose `@lumen` markers can be replaced.
///
/// The source text is never re-serialized: everything outside the removed
/// markers is kept byte for byte. Markers nested inside blocks are found
/// and removed too, but their rules are still appended at the end of the
/// stylesheet.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    source: String,
    /// Markers still present, in document order.
    markers: Vec<(Marker, Range<usize>)>,
    removed: Vec<Range<usize>>,
    appended: Vec<Rule>,
}

impl Stylesheet {
    pub fn parse(source: &str) -> Self {
        let mut markers = Vec::new();
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        scan(&mut parser, source, &mut markers);

        Self {
            source: source.to_string(),
            markers,
            removed: Vec::new(),
            appended: Vec::new(),
        }
    }

    /// Renders the stylesheet: kept source first, then appended rules, one
    /// per line.
    pub fn to_css(&self) -> String {
        let mut removed = self.removed.clone();
        removed.sort_by_key(|range| range.start);

        let mut kept = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for range in removed {
            kept.push_str(&self.source[cursor..range.start]);
            cursor = range.end;
        }
        kept.push_str(&self.source[cursor..]);

        let mut css = if kept.trim().is_empty() {
            String::new()
        } else {
            kept.trim_end().to_string()
        };
        for rule in &self.appended {
            if !css.is_empty() {
                css.push('\n');
            }
            // Writing into a String cannot fail.
            let _ = write!(css, "{}", rule);
        }
        css
    }
}

/// Collects `@lumen` markers at this nesting level and inside every block
/// below it.
fn scan<'i>(
    parser: &mut Parser<'i, '_>,
    source: &str,
    markers: &mut Vec<(Marker, Range<usize>)>,
) {
    loop {
        parser.skip_whitespace();
        let start = parser.position().byte_index();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return,
        };

        match token {
            Token::AtKeyword(ref name) if name.eq_ignore_ascii_case(Marker::AT_RULE) => {
                let parsed = parser.try_parse(|p| {
                    let marker = Marker::from_param(p.expect_ident().map_err(|_| ())?).ok_or(())?;
                    if !p.is_exhausted() {
                        p.expect_semicolon().map_err(|_| ())?;
                    }
                    Ok::<_, ()>(marker)
                });
                match parsed {
                    Ok(marker) => {
                        let end = parser.position().byte_index();
                        markers.push((marker, marker_span(source, start, end)));
                    }
                    Err(()) => debug!(offset = start, "leaving unrecognized @lumen rule in place"),
                }
            }
            Token::CurlyBracketBlock
            | Token::SquareBracketBlock
            | Token::ParenthesisBlock
            | Token::Function(_) => {
                let _ = parser.parse_nested_block(|nested| {
                    scan(nested, source, markers);
                    Ok::<(), ParseError<'i, ()>>(())
                });
            }
            _ => {}
        }
    }
}

/// The bytes to cut for a marker at `start..end`.
///
/// A marker alone on its line takes the whole line with it, indentation
/// and line break included. Otherwise only trailing blanks up to the line
/// break go.
fn marker_span(source: &str, start: usize, end: usize) -> Range<usize> {
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let from = if source[line_start..start].trim().is_empty() {
        line_start
    } else {
        start
    };

    let rest = &source[end..];
    match rest.find('\n') {
        Some(i) if rest[..i].trim().is_empty() => from..end + i + 1,
        None if rest.trim().is_empty() => from..source.len(),
        _ => start..end,
    }
}

impl DocumentWalker for Stylesheet {
    fn markers(&self) -> Vec<Marker> {
        self.markers.iter().map(|(marker, _)| *marker).collect()
    }

    fn remove_marker(&mut self, marker: Marker) {
        let (matching, rest): (Vec<_>, Vec<_>) =
            self.markers.drain(..).partition(|(m, _)| *m == marker);
        self.markers = rest;
        self.removed
            .extend(matching.into_iter().map(|(_, range)| range));
    }

    fn append_rules(&mut self, rules: &[Rule]) {
        self.appended.extend_from_slice(rules);
    }
}

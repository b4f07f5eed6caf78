//! CSS color parsing and HSL lightness arithmetic.
//!
//! Parsing is delegated to `cssparser`'s tokenizer, so any value a
//! stylesheet would accept as a hex, named, `rgb()`/`rgba()` or
//! `hsl()`/`hsla()` color parses here too.

use std::fmt;

use cssparser::color::{parse_hash_color, parse_named_color};
use cssparser::{ParseError, Parser, ParserInput, SourceLocation, Token};

use crate::error::GenerateError;

/// A color in HSL space.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// `[0, 100]`, alpha is `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// Parses any CSS color value into HSL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen_tokens::color::Hsla;
    ///
    /// let gray = Hsla::parse("#e6e6e6").unwrap();
    /// assert_eq!(gray.to_string(), "hsl(0, 0%, 90.2%)");
    ///
    /// assert!(Hsla::parse("not-a-color").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, GenerateError> {
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        parse_color(&mut parser)
            .ok()
            .filter(|_| parser.is_exhausted())
            .ok_or_else(|| GenerateError::InvalidColor {
                value: value.to_string(),
            })
    }

    pub fn from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        let (r, g, b) = (red / 255.0, green / 255.0, blue / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            hue,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
            alpha,
        }
    }

    /// Moves lightness toward black by `fraction` of its current value.
    pub fn darken(self, fraction: f64) -> Self {
        Self {
            lightness: self.lightness * (1.0 - fraction),
            ..self
        }
    }

    /// Moves lightness toward white by `fraction` of the remaining headroom.
    pub fn lighten(self, fraction: f64) -> Self {
        Self {
            lightness: self.lightness + fraction * (100.0 - self.lightness),
            ..self
        }
    }
}

/// Serializes as `hsl(H, S%, L%)`, or `hsla(H, S%, L%, A)` when translucent.
///
/// Channels are rounded to one decimal place and alpha to three, which
/// is finer than the 1/255 step of a hex alpha. Whole numbers print
/// without a fractional part.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = (
            round(self.hue, 1),
            round(self.saturation, 1),
            round(self.lightness, 1),
        );
        let alpha = round(self.alpha, 3);
        if alpha < 1.0 {
            write!(f, "hsla({}, {}%, {}%, {})", h, s, l, alpha)
        } else {
            write!(f, "hsl({}, {}%, {}%)", h, s, l)
        }
    }
}

fn round(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    // Adding 0.0 turns -0.0 into 0.0.
    (value * scale).round() / scale + 0.0
}

fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> Result<Hsla, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => {
            let (r, g, b, a) =
                parse_hash_color(value.as_bytes()).map_err(|()| invalid(location))?;
            Ok(Hsla::from_rgba(r.into(), g.into(), b.into(), a.into()))
        }
        Token::Ident(ref name) if name.eq_ignore_ascii_case("transparent") => {
            Ok(Hsla::from_rgba(0.0, 0.0, 0.0, 0.0))
        }
        Token::Ident(ref name) => {
            let (r, g, b) = parse_named_color(name).map_err(|()| invalid(location))?;
            Ok(Hsla::from_rgba(r.into(), g.into(), b.into(), 1.0))
        }
        Token::Function(ref name) => {
            let function = Function::from_name(name).ok_or_else(|| invalid(location))?;
            let args = parser.parse_nested_block(parse_arguments)?;
            function.build(&args).ok_or_else(|| invalid(location))
        }
        _ => Err(invalid(location)),
    }
}

fn invalid<'i>(location: SourceLocation) -> ParseError<'i, ()> {
    location.new_custom_error(())
}

#[derive(Debug, Clone, Copy)]
enum Function {
    Rgb,
    Hsl,
}

impl Function {
    fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") {
            Some(Function::Rgb)
        } else if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") {
            Some(Function::Hsl)
        } else {
            None
        }
    }

    fn build(self, args: &[Argument]) -> Option<Hsla> {
        let alpha = match args.get(3) {
            None => 1.0,
            Some(Argument::Number(value)) => *value,
            Some(Argument::Percentage(unit)) => *unit,
        }
        .clamp(0.0, 1.0);
        if !(3..=4).contains(&args.len()) {
            return None;
        }

        match self {
            Function::Rgb => {
                let channel = |arg: &Argument| match *arg {
                    Argument::Number(value) => value.clamp(0.0, 255.0),
                    Argument::Percentage(unit) => (unit * 255.0).clamp(0.0, 255.0),
                };
                Some(Hsla::from_rgba(
                    channel(&args[0]),
                    channel(&args[1]),
                    channel(&args[2]),
                    alpha,
                ))
            }
            Function::Hsl => {
                // Bare numbers are accepted for S and L as percentages.
                let percent = |arg: &Argument| match *arg {
                    Argument::Number(value) => value.clamp(0.0, 100.0),
                    Argument::Percentage(unit) => (unit * 100.0).clamp(0.0, 100.0),
                };
                let hue = match args[0] {
                    Argument::Number(degrees) => degrees.rem_euclid(360.0),
                    Argument::Percentage(_) => return None,
                };
                Some(Hsla {
                    hue,
                    saturation: percent(&args[1]),
                    lightness: percent(&args[2]),
                    alpha,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Argument {
    Number(f64),
    /// Fraction of one: `50%` is `0.5`.
    Percentage(f64),
}

fn parse_arguments<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Vec<Argument>, ParseError<'i, ()>> {
    let mut args = Vec::new();
    while !parser.is_exhausted() {
        let location = parser.current_source_location();
        match *parser.next()? {
            Token::Number { value, .. } => args.push(Argument::Number(value.into())),
            Token::Percentage { unit_value, .. } => {
                args.push(Argument::Percentage(unit_value.into()))
            }
            Token::Dimension {
                value, ref unit, ..
            } if unit.eq_ignore_ascii_case("deg") => args.push(Argument::Number(value.into())),
            Token::Comma | Token::Delim('/') => {}
            _ => return Err(invalid(location)),
        }
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(value: &str) -> String {
        Hsla::parse(value).unwrap().to_string()
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(hsl("#e6e6e6"), "hsl(0, 0%, 90.2%)");
        assert_eq!(hsl("#3b82f6"), "hsl(217.2, 91.2%, 59.8%)");
        assert_eq!(hsl("#f00"), "hsl(0, 100%, 50%)");
        assert_eq!(hsl("#000000"), "hsl(0, 0%, 0%)");
        assert_eq!(hsl("#ffffff"), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        assert_eq!(hsl("#ff000080"), "hsla(0, 100%, 50%, 0.502)");
    }

    #[test]
    fn test_near_opaque_alpha_is_kept() {
        assert_eq!(hsl("rgba(255, 0, 0, 0.96)"), "hsla(0, 100%, 50%, 0.96)");
        assert_eq!(hsl("#ff0000f8"), "hsla(0, 100%, 50%, 0.973)");
        assert_eq!(hsl("rgba(255, 0, 0, 0.9999)"), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(hsl("red"), "hsl(0, 100%, 50%)");
        assert_eq!(hsl("White"), "hsl(0, 0%, 100%)");
        assert_eq!(hsl("transparent"), "hsla(0, 0%, 0%, 0)");
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(hsl("rgb(255, 0, 0)"), "hsl(0, 100%, 50%)");
        assert_eq!(hsl("rgba(0 0 255 / 50%)"), "hsla(240, 100%, 50%, 0.5)");
        assert_eq!(hsl("hsl(120, 50%, 25%)"), "hsl(120, 50%, 25%)");
        assert_eq!(hsl("hsl(480deg 50% 25%)"), "hsl(120, 50%, 25%)");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(hsl("  #000  "), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_parse_invalid() {
        let invalid = [
            "",
            "#12",
            "blurple",
            "rgb(1, 2)",
            "#fff #000",
            "12px",
            "hsl(10%, 1%, 1%)",
        ];
        for value in invalid {
            assert_eq!(
                Hsla::parse(value),
                Err(GenerateError::InvalidColor {
                    value: value.to_string()
                }),
                "{value:?} should not parse"
            );
        }
    }

    #[test]
    fn test_darken_scales_lightness() {
        let base = Hsla::parse("#e6e6e6").unwrap();
        assert_eq!(base.darken(0.10).to_string(), "hsl(0, 0%, 81.2%)");
        assert_eq!(base.darken(0.40).to_string(), "hsl(0, 0%, 54.1%)");
    }

    #[test]
    fn test_lighten_uses_headroom() {
        let base = Hsla::parse("#e6e6e6").unwrap();
        assert_eq!(base.lighten(0.10).to_string(), "hsl(0, 0%, 91.2%)");
        let black = Hsla::parse("#000").unwrap();
        assert_eq!(black.lighten(0.25).to_string(), "hsl(0, 0%, 25%)");
    }

    #[test]
    fn test_hue_and_saturation_unchanged() {
        let base = Hsla::parse("#3b82f6").unwrap();
        let darker = base.darken(0.3);
        let lighter = base.lighten(0.3);
        assert_eq!(darker.hue, base.hue);
        assert_eq!(lighter.saturation, base.saturation);
    }
}

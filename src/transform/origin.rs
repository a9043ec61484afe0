//! Origin - the anchor point for scale and rotate
//!
//! Parses the CSS `transform-origin` grammar (one to three values, each axis a
//! length, a percentage or a keyword) and resolves it against the element's
//! layout box. Output is always absolute pixels.

use crate::error::{Error, Result};
use crate::primitives::{Vector3, format_number};

/// Untransformed layout box of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One axis of an origin as written in CSS
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub const CENTER: Self = Self::Percent(50.0);

    /// Absolute pixels along an axis of the given extent.
    pub fn resolve(&self, extent: f64) -> f64 {
        match *self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Px(px) => format!("{}px", format_number(*px)),
            Self::Percent(pct) => format!("{}%", format_number(*pct)),
        }
    }

    /// `Npx`, `N%` or a bare number (pixels).
    fn parse(token: &str) -> Option<Self> {
        let finite = |n: &str| n.parse::<f64>().ok().filter(|n| n.is_finite());
        if let Some(n) = token.strip_suffix("px") {
            finite(n).map(Self::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            finite(n).map(Self::Percent)
        } else {
            finite(token).map(Self::Px)
        }
    }
}

/// A token of the origin grammar
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    /// `left` / `right`
    Horizontal(Length),
    /// `top` / `bottom`
    Vertical(Length),
    Center,
    Length(Length),
}

impl Token {
    fn parse(raw: &str) -> Result<Self> {
        let token = match raw.to_ascii_lowercase().as_str() {
            "left" => Self::Horizontal(Length::Percent(0.0)),
            "right" => Self::Horizontal(Length::Percent(100.0)),
            "top" => Self::Vertical(Length::Percent(0.0)),
            "bottom" => Self::Vertical(Length::Percent(100.0)),
            "center" => Self::Center,
            other => Self::Length(
                Length::parse(other)
                    .ok_or_else(|| Error::Argument(format!("invalid origin value `{raw}`")))?,
            ),
        };
        Ok(token)
    }

    fn length(&self) -> Length {
        match *self {
            Self::Horizontal(l) | Self::Vertical(l) | Self::Length(l) => l,
            Self::Center => Length::CENTER,
        }
    }

    fn is_keyword(&self) -> bool {
        !matches!(self, Self::Length(_))
    }
}

/// Resolved anchor point plus the CSS it was written as
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    x: Length,
    y: Length,
    point: Vector3,
}

impl Origin {
    /// Browser default: the centre of the box, zero depth.
    pub const DEFAULT_CSS: &'static str = "50% 50% 0";

    pub fn new(x: Length, y: Length, z: f64, size: BoxSize) -> Self {
        Self {
            x,
            y,
            point: Vector3::new(x.resolve(size.width), y.resolve(size.height), z),
        }
    }

    pub fn center(size: BoxSize) -> Self {
        Self::new(Length::CENTER, Length::CENTER, 0.0, size)
    }

    /// Origin at an absolute point in pixels.
    pub fn at(point: Vector3) -> Self {
        Self {
            x: Length::Px(point.x),
            y: Length::Px(point.y),
            point,
        }
    }

    /// Parse `transform-origin` text and resolve it against `size`.
    pub fn parse(css: &str, size: BoxSize) -> Result<Self> {
        let tokens = css
            .split_whitespace()
            .map(Token::parse)
            .collect::<Result<Vec<_>>>()?;

        let (x, y, z) = match tokens.as_slice() {
            [only] => match only {
                Token::Vertical(l) => (Length::CENTER, *l, None),
                Token::Horizontal(_) | Token::Center | Token::Length(_) => {
                    (only.length(), Length::CENTER, None)
                }
            },
            [first, second] => {
                let (x, y) = Self::pair(*first, *second, css)?;
                (x, y, None)
            }
            [first, second, depth] => {
                let (x, y) = Self::pair(*first, *second, css)?;
                (x, y, Some(*depth))
            }
            _ => {
                return Err(Error::Argument(format!(
                    "transform-origin takes 1 to 3 values, got `{css}`"
                )));
            }
        };

        let z = match z {
            None => 0.0,
            Some(Token::Length(Length::Px(px))) => px,
            Some(_) => {
                return Err(Error::Argument(format!(
                    "origin depth must be a length, got `{css}`"
                )));
            }
        };
        Ok(Self::new(x, y, z, size))
    }

    /// Order the first two values into (x, y). Keywords may come in either order.
    fn pair(first: Token, second: Token, css: &str) -> Result<(Length, Length)> {
        let invalid = || Error::Argument(format!("invalid transform-origin `{css}`"));
        let swapped = matches!(first, Token::Vertical(_)) || matches!(second, Token::Horizontal(_));
        let (x, y) = if swapped { (second, first) } else { (first, second) };

        if swapped && !(first.is_keyword() && second.is_keyword()) {
            return Err(invalid());
        }
        if matches!(x, Token::Vertical(_)) || matches!(y, Token::Horizontal(_)) {
            return Err(invalid());
        }
        Ok((x.length(), y.length()))
    }

    pub const fn point(&self) -> Vector3 {
        self.point
    }

    /// The CSS this origin was written as, e.g. `50% 50% 0`.
    pub fn descriptor(&self) -> String {
        format!("{} {} {}", self.x.to_css(), self.y.to_css(), format_number(self.point.z))
    }

    /// Absolute form, `<x>px <y>px <z>`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}",
            format_number(self.point.x),
            format_number(self.point.y),
            format_number(self.point.z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: BoxSize = BoxSize::new(100.0, 100.0);

    fn css(text: &str) -> String {
        Origin::parse(text, BOX).unwrap().to_css()
    }

    #[test]
    fn default_is_center() {
        assert_eq!(Origin::center(BOX).to_css(), "50px 50px 0");
        assert_eq!(css(Origin::DEFAULT_CSS), "50px 50px 0");
    }

    #[test]
    fn computed_style_form() {
        assert_eq!(css("50px 50px 0px"), "50px 50px 0");
        assert_eq!(css("12.5px 7px 3px"), "12.5px 7px 3");
    }

    #[test]
    fn keywords_in_either_order() {
        assert_eq!(css("top left"), "0px 0px 0");
        assert_eq!(css("left top"), "0px 0px 0");
        assert_eq!(css("bottom right"), "100px 100px 0");
        assert_eq!(css("center bottom"), "50px 100px 0");
        assert_eq!(css("top"), "50px 0px 0");
        assert_eq!(css("right"), "100px 50px 0");
    }

    #[test]
    fn percentages_and_bare_numbers() {
        assert_eq!(css("10% 10%"), "10px 10px 0");
        assert_eq!(css("10 20"), "10px 20px 0");
        assert_eq!(
            Origin::parse("25% 75%", BoxSize::new(200.0, 40.0)).unwrap().to_css(),
            "50px 30px 0"
        );
    }

    #[test]
    fn descriptor_keeps_authored_units() {
        let origin = Origin::parse("10% 4px 2", BOX).unwrap();
        assert_eq!(origin.descriptor(), "10% 4px 2");
        assert_eq!(origin.point(), Vector3::new(10.0, 4.0, 2.0));
    }

    #[test]
    fn rejects_invalid_grammar() {
        for bad in ["", "left right", "top bottom", "top 10px", "10px left", "a b", "1 2 3%", "1 2 3 4"] {
            assert!(
                matches!(Origin::parse(bad, BOX), Err(Error::Argument(_))),
                "accepted `{bad}`"
            );
        }
    }
}

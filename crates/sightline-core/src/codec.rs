//! Textual point literals.
//!
//! Three grammars are accepted, all with optional whitespace around the
//! components:
//!
//! | Form | Example |
//! |------|---------|
//! | legacy | `3/-4` |
//! | bracketed | `(3, -4)` |
//! | angled | `<3, -4>` |
//!
//! A literal may carry one leading `+` or `-`, which turns it into a shift
//! relative to a base coordinate: `+(1,2)` and `+1/2` add the value to the
//! base, `-(1,2)` subtracts it. A `-` directly followed by a digit is just
//! the sign of the legacy `x` component, so `-3/4` stays absolute and a
//! legacy literal can only be shifted with `+`.
//!
//! [`format`] writes the bracketed form without spaces, so
//! `parse(&format(p), None, false) == Ok(p)`.

use crate::coord::Coordinate;
use crate::error::ParseError;
use std::str::FromStr;

/// Direction of a relative shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shift {
    Add,
    Subtract,
}

/// Parse a point literal.
///
/// With `allow_shift` set, a leading `+` (or a `-` before `(` or `<`)
/// applies the parsed value to `base`; that requires `base` to be `Some`.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty or malformed input, out-of-range
/// components, a shift that is disallowed or has no base, a doubled shift
/// sign, or a shift that overflows.
///
/// # Examples
///
/// ```
/// use sightline_core::{codec, Coordinate};
///
/// let base = Coordinate::new(-1, -3);
/// assert_eq!(codec::parse("-<2,3>", Some(base), true), Ok(Coordinate::new(-3, -6)));
/// assert_eq!(codec::parse("4/5", None, false), Ok(Coordinate::new(4, 5)));
/// assert!(codec::parse("(1,3", None, false).is_err());
/// ```
pub fn parse(
    text: &str,
    base: Option<Coordinate>,
    allow_shift: bool,
) -> Result<Coordinate, ParseError> {
    parse_inner(text, base, allow_shift).inspect_err(|e| {
        tracing::debug!(input = text, error = %e, "point literal rejected");
    })
}

/// Parse a literal that may be relative to `base`.
///
/// Shorthand for `parse(text, Some(base), true)`.
pub fn parse_relative(text: &str, base: Coordinate) -> Result<Coordinate, ParseError> {
    parse(text, Some(base), true)
}

/// Format a coordinate as a bracketed literal, `(x,y)`.
pub fn format(p: Coordinate) -> String {
    p.to_string()
}

fn parse_inner(
    text: &str,
    base: Option<Coordinate>,
    allow_shift: bool,
) -> Result<Coordinate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (shift, body) = split_shift(trimmed)?;
    let value = parse_absolute(body)?;

    let Some(shift) = shift else {
        return Ok(value);
    };
    if !allow_shift {
        return Err(ParseError::ShiftNotAllowed);
    }
    let base = base.ok_or(ParseError::MissingBase)?;
    let shifted = match shift {
        Shift::Add => base.checked_add(value),
        Shift::Subtract => base.checked_sub(value),
    };
    shifted.ok_or(ParseError::ShiftOverflow {
        base,
        offset: value,
    })
}

/// Peel off a leading shift sign, if the literal has one.
fn split_shift(s: &str) -> Result<(Option<Shift>, &str), ParseError> {
    let shift = match s.as_bytes()[0] {
        b'+' => Shift::Add,
        b'-' => Shift::Subtract,
        _ => return Ok((None, s)),
    };
    let rest = s[1..].trim_start();
    match (shift, rest.as_bytes().first()) {
        (_, Some(b'+' | b'-')) => Err(ParseError::DoubleShift),
        (Shift::Add, _) | (Shift::Subtract, Some(b'(' | b'<')) => Ok((Some(shift), rest)),
        // A negative legacy x component, e.g. "-3/4".
        (Shift::Subtract, _) => Ok((None, s)),
    }
}

fn parse_absolute(s: &str) -> Result<Coordinate, ParseError> {
    if let Some(inner) = s.strip_prefix('(') {
        let inner = inner.strip_suffix(')').ok_or_else(|| malformed(s, "missing ')'"))?;
        return parse_pair(s, inner, ',');
    }
    if let Some(inner) = s.strip_prefix('<') {
        let inner = inner.strip_suffix('>').ok_or_else(|| malformed(s, "missing '>'"))?;
        return parse_pair(s, inner, ',');
    }
    if s.contains('/') {
        return parse_pair(s, s, '/');
    }
    Err(malformed(s, "expected x/y, (x, y) or <x, y>"))
}

fn parse_pair(whole: &str, inner: &str, separator: char) -> Result<Coordinate, ParseError> {
    let (x, y) = inner
        .split_once(separator)
        .ok_or_else(|| malformed(whole, "missing separator"))?;
    Ok(Coordinate::new(parse_component(x)?, parse_component(y)?))
}

fn parse_component(s: &str) -> Result<i32, ParseError> {
    let s = s.trim();
    s.parse::<i32>().map_err(|source| ParseError::InvalidNumber {
        input: s.to_owned(),
        source,
    })
}

fn malformed(input: &str, reason: &'static str) -> ParseError {
    ParseError::Malformed {
        input: input.to_owned(),
        reason,
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    /// Parse an absolute literal; shifts are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, None, false)
    }
}

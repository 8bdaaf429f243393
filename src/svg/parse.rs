// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing path text into [`PathEl`]s.

use arrayvec::ArrayVec;
use nom::{
    character::complete::{char, digit1, multispace0},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

use super::{CommandKind, PathEl};
use crate::{Point, SvgParseError};

/// Parse path text into its elements, one per argument group.
///
/// Only absolute commands from `M L H V C S Q T Z` are accepted. A command
/// may repeat its argument group; extra pairs after `M` are line-tos.
///
/// ```
/// use bezier_offset::svg::{parse_elements, PathEl};
/// use bezier_offset::Point;
///
/// let els = parse_elements("M 0 0 1 1 H 3").unwrap();
/// assert_eq!(
///     els,
///     vec![
///         PathEl::MoveTo(Point::new(0.0, 0.0)),
///         PathEl::LineTo(Point::new(1.0, 1.0)),
///         PathEl::Horiz(3.0),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns the [`SvgParseError`] describing the first problem found.
pub fn parse_elements(input: &str) -> Result<Vec<PathEl>, SvgParseError> {
    let mut input = skip_ws(input);
    if input.is_empty() {
        return Err(SvgParseError::Empty);
    }
    let mut elements = Vec::new();
    while let Some(letter) = input.chars().next() {
        let kind = command_kind(letter)?;
        if elements.is_empty() && kind != CommandKind::MoveTo {
            return Err(SvgParseError::MissingMoveTo);
        }
        input = skip_ws(&input[letter.len_utf8()..]);
        if kind == CommandKind::ClosePath {
            elements.push(PathEl::ClosePath);
            continue;
        }
        // The first group is mandatory, more may follow.
        let (rest, values) = argument_group(input, kind.arity())?;
        elements.push(PathEl::from_values(kind, &values));
        input = rest;
        let repeat = match kind {
            CommandKind::MoveTo => CommandKind::LineTo,
            k => k,
        };
        loop {
            let rest = comma_or_ws(input);
            if !starts_number(rest) {
                // A separator must be followed by another group.
                if skip_ws(input).starts_with(',') {
                    return Err(SvgParseError::Wrong);
                }
                input = skip_ws(rest);
                break;
            }
            let (rest, values) = argument_group(rest, repeat.arity())?;
            elements.push(PathEl::from_values(repeat, &values));
            input = rest;
        }
    }
    Ok(elements)
}

fn command_kind(letter: char) -> Result<CommandKind, SvgParseError> {
    if let Some(kind) = CommandKind::from_letter(letter) {
        return Ok(kind);
    }
    match letter {
        'A' => Err(SvgParseError::UnsupportedArc),
        'a' | 'm' | 'l' | 'h' | 'v' | 'c' | 's' | 'q' | 't' | 'z' => {
            Err(SvgParseError::RelativeCommand(letter))
        }
        c if c.is_alphabetic() => Err(SvgParseError::UnknownCommand(c)),
        _ => Err(SvgParseError::Wrong),
    }
}

fn argument_group(input: &str, arity: usize) -> Result<(&str, ArrayVec<f64, 6>), SvgParseError> {
    let mut values = ArrayVec::new();
    let mut input = input;
    for i in 0..arity {
        if i > 0 {
            input = comma_or_ws(input);
        }
        if input.is_empty() {
            return Err(SvgParseError::UnexpectedEof);
        }
        let (rest, value) = number(input).map_err(|_| SvgParseError::Wrong)?;
        if !value.is_finite() {
            return Err(SvgParseError::Wrong);
        }
        values.push(value);
        input = rest;
    }
    Ok((input, values))
}

/// `-?digits(.digits)?`
fn number(input: &str) -> IResult<&str, f64> {
    let (rest, text) = recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)?;
    // The recognized text is always a valid float literal.
    let value = text.parse().unwrap_or(f64::NAN);
    Ok((rest, value))
}

fn starts_number(input: &str) -> bool {
    matches!(input.as_bytes().first(), Some(b'-' | b'0'..=b'9'))
}

fn comma_or_ws(input: &str) -> &str {
    fn inner(input: &str) -> IResult<&str, ()> {
        let (input, _) = multispace0(input)?;
        let (input, _) = opt(char(','))(input)?;
        let (input, _) = multispace0(input)?;
        Ok((input, ()))
    }
    inner(input).map(|(rest, ())| rest).unwrap_or(input)
}

fn skip_ws(input: &str) -> &str {
    multispace0::<&str, nom::error::Error<&str>>(input)
        .map(|(rest, _)| rest)
        .unwrap_or(input)
}

impl PathEl {
    /// Caller guarantees `values.len() == kind.arity()`.
    fn from_values(kind: CommandKind, v: &[f64]) -> PathEl {
        let pt = |i: usize| Point::new(v[i], v[i + 1]);
        match kind {
            CommandKind::MoveTo => PathEl::MoveTo(pt(0)),
            CommandKind::LineTo => PathEl::LineTo(pt(0)),
            CommandKind::Horiz => PathEl::Horiz(v[0]),
            CommandKind::Vert => PathEl::Vert(v[0]),
            CommandKind::CurveTo => PathEl::CurveTo(pt(0), pt(2), pt(4)),
            CommandKind::SmoothCurveTo => PathEl::SmoothCurveTo(pt(0), pt(2)),
            CommandKind::QuadTo => PathEl::QuadTo(pt(0), pt(2)),
            CommandKind::SmoothQuadTo => PathEl::SmoothQuadTo(pt(0)),
            CommandKind::ClosePath => PathEl::ClosePath,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_elements;
    use crate::svg::PathEl;
    use crate::{Point, SvgParseError};

    #[test]
    fn parse_basic() {
        let els = parse_elements("M 10,20 L 30 -40.5 Z").unwrap();
        assert_eq!(
            els,
            vec![
                PathEl::MoveTo(Point::new(10.0, 20.0)),
                PathEl::LineTo(Point::new(30.0, -40.5)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn parse_compact() {
        let els = parse_elements("M0 0L1-1C1 2 3 4 5 6").unwrap();
        assert_eq!(els.len(), 3);
        assert_eq!(els[1], PathEl::LineTo(Point::new(1.0, -1.0)));
        assert_eq!(
            els[2],
            PathEl::CurveTo(Point::new(1., 2.), Point::new(3., 4.), Point::new(5., 6.))
        );
    }

    #[test]
    fn parse_repeated_groups() {
        let els = parse_elements("M 0 0 Q 1 1 2 0 3 -1 4 0 T 6 0 8 0").unwrap();
        assert_eq!(els.len(), 5);
        assert_eq!(els[2], PathEl::QuadTo(Point::new(3., -1.), Point::new(4., 0.)));
        assert_eq!(els[4], PathEl::SmoothQuadTo(Point::new(8., 0.)));
        let els = parse_elements("M 0 0 V 1, 2 ,3").unwrap();
        assert_eq!(els[3], PathEl::Vert(3.0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_elements(""), Err(SvgParseError::Empty));
        assert_eq!(parse_elements("  \n"), Err(SvgParseError::Empty));
        assert_eq!(parse_elements("L 1 1"), Err(SvgParseError::MissingMoveTo));
        assert_eq!(parse_elements("M 0 0 A 1 1 0 0 1 2 2"), Err(SvgParseError::UnsupportedArc));
        assert_eq!(parse_elements("M 0 0 l 1 1"), Err(SvgParseError::RelativeCommand('l')));
        assert_eq!(parse_elements("m 0 0"), Err(SvgParseError::RelativeCommand('m')));
        assert_eq!(parse_elements("M 0 0 X 1"), Err(SvgParseError::UnknownCommand('X')));
        assert_eq!(parse_elements("M 0 0 L 1"), Err(SvgParseError::UnexpectedEof));
        assert_eq!(parse_elements("M 0 0 L 1 Z"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M 0 x"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M .5 0"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M 0 0 L 1 1 2"), Err(SvgParseError::UnexpectedEof));
    }

    #[test]
    fn parse_dangling_separator() {
        assert_eq!(parse_elements("M 0 0 L 1 1,"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M 0 0 L 1 1 , Z"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M 0 0,"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M 0 0 L 1 1 Z ,"), Err(SvgParseError::Wrong));
        assert_eq!(parse_elements("M 0 0, 1 1").unwrap().len(), 2);
    }
}

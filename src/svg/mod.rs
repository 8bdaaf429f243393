// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path text: parsing and normalization to cubic segments.
//!
//! A path is normalized to a list of [`NormalizedCommand`]s containing only
//! move-tos and cubic curve-tos. Every other command is rewritten, carrying
//! the previous endpoint, the previous quadratic control point and the start
//! of the current subpath from one command to the next.

use core::fmt;
use core::str::FromStr;

use arrayvec::ArrayVec;

use crate::quadbez::raise;
use crate::{CubicBez, Curve, Error, KernelConfig, Point, Result, SvgParseError};

mod parse;

pub use parse::parse_elements;

/// The supported command kinds, all absolute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M x y`
    MoveTo,
    /// `L x y`
    LineTo,
    /// `H x`
    Horiz,
    /// `V y`
    Vert,
    /// `C x1 y1 x2 y2 x y`
    CurveTo,
    /// `S x2 y2 x y`
    SmoothCurveTo,
    /// `Q x1 y1 x y`
    QuadTo,
    /// `T x y`
    SmoothQuadTo,
    /// `Z`
    ClosePath,
}

impl CommandKind {
    /// The command letter.
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::Horiz => 'H',
            CommandKind::Vert => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::SmoothCurveTo => 'S',
            CommandKind::QuadTo => 'Q',
            CommandKind::SmoothQuadTo => 'T',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// The number of values in one argument group.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::ClosePath => 0,
            CommandKind::Horiz | CommandKind::Vert => 1,
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => 2,
            CommandKind::SmoothCurveTo | CommandKind::QuadTo => 4,
            CommandKind::CurveTo => 6,
        }
    }

    /// Look up a command letter. Lowercase letters are not commands here.
    pub fn from_letter(letter: char) -> Option<CommandKind> {
        Some(match letter {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::Horiz,
            'V' => CommandKind::Vert,
            'C' => CommandKind::CurveTo,
            'S' => CommandKind::SmoothCurveTo,
            'Q' => CommandKind::QuadTo,
            'T' => CommandKind::SmoothQuadTo,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        })
    }
}

/// One parsed argument group of a path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Line to the point.
    LineTo(Point),
    /// Horizontal line to the x coordinate.
    Horiz(f64),
    /// Vertical line to the y coordinate.
    Vert(f64),
    /// Cubic curve with two control points and an endpoint.
    CurveTo(Point, Point, Point),
    /// Cubic curve with an implied first control point.
    SmoothCurveTo(Point, Point),
    /// Quadratic curve with a control point and an endpoint.
    QuadTo(Point, Point),
    /// Quadratic curve with an implied control point.
    SmoothQuadTo(Point),
    /// Close the current subpath.
    ClosePath,
}

impl PathEl {
    /// The kind of command this came from.
    pub fn kind(&self) -> CommandKind {
        match self {
            PathEl::MoveTo(_) => CommandKind::MoveTo,
            PathEl::LineTo(_) => CommandKind::LineTo,
            PathEl::Horiz(_) => CommandKind::Horiz,
            PathEl::Vert(_) => CommandKind::Vert,
            PathEl::CurveTo(..) => CommandKind::CurveTo,
            PathEl::SmoothCurveTo(..) => CommandKind::SmoothCurveTo,
            PathEl::QuadTo(..) => CommandKind::QuadTo,
            PathEl::SmoothQuadTo(_) => CommandKind::SmoothQuadTo,
            PathEl::ClosePath => CommandKind::ClosePath,
        }
    }
}

/// A command of a normalized path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NormalizedCommand {
    /// Start a subpath.
    MoveTo(Point),
    /// A cubic segment from the previous endpoint.
    CurveTo(Point, Point, Point),
}

impl NormalizedCommand {
    /// The command kind, [`CommandKind::MoveTo`] or [`CommandKind::CurveTo`].
    pub fn command(&self) -> CommandKind {
        match self {
            NormalizedCommand::MoveTo(_) => CommandKind::MoveTo,
            NormalizedCommand::CurveTo(..) => CommandKind::CurveTo,
        }
    }

    /// The command's values, in path text order.
    pub fn values(&self) -> ArrayVec<f64, 6> {
        let mut v = ArrayVec::new();
        match *self {
            NormalizedCommand::MoveTo(p) => {
                v.push(p.x);
                v.push(p.y);
            }
            NormalizedCommand::CurveTo(p1, p2, p3) => {
                for p in [p1, p2, p3] {
                    v.push(p.x);
                    v.push(p.y);
                }
            }
        }
        v
    }

    /// The point this command ends on.
    pub fn end_point(&self) -> Point {
        match *self {
            NormalizedCommand::MoveTo(p) | NormalizedCommand::CurveTo(_, _, p) => p,
        }
    }
}

impl fmt::Display for NormalizedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command().letter())?;
        for v in self.values() {
            write!(f, " {}", SvgNum(v))?;
        }
        Ok(())
    }
}

/// Normalizer state carried between commands.
#[derive(Clone, Copy, Debug)]
struct State {
    prev_end: Point,
    /// Control point of the previous command when it was `Q` or `T`.
    prev_quad_ctrl: Option<Point>,
    first: Point,
}

impl State {
    /// Rewrite one element, returning the output command and the quadratic
    /// control point it used, if any.
    fn rewrite(&self, el: PathEl) -> (NormalizedCommand, Option<Point>) {
        let line_to = |e: Point| NormalizedCommand::CurveTo(e, e, e);
        let quad_to = |c: Point, e: Point| {
            let [_, c1, c2, e] = raise(self.prev_end, c, e);
            (NormalizedCommand::CurveTo(c1, c2, e), Some(c))
        };
        match el {
            PathEl::MoveTo(p) => (NormalizedCommand::MoveTo(p), None),
            PathEl::LineTo(e) => (line_to(e), None),
            PathEl::Horiz(x) => (line_to(Point::new(x, self.prev_end.y)), None),
            PathEl::Vert(y) => (line_to(Point::new(self.prev_end.x, y)), None),
            PathEl::CurveTo(c1, c2, e) => (NormalizedCommand::CurveTo(c1, c2, e), None),
            PathEl::SmoothCurveTo(c2, e) => {
                (NormalizedCommand::CurveTo(self.prev_end, c2, e), None)
            }
            PathEl::QuadTo(c, e) => quad_to(c, e),
            PathEl::SmoothQuadTo(e) => {
                let c = match self.prev_quad_ctrl {
                    Some(prev) => self.prev_end + (self.prev_end - prev),
                    None => self.prev_end,
                };
                quad_to(c, e)
            }
            PathEl::ClosePath => (line_to(self.first), None),
        }
    }
}

/// Normalize parsed elements into move-tos and cubic curve-tos.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `elements` is empty or does not start with a
/// move-to.
pub fn normalize(elements: &[PathEl]) -> Result<Vec<NormalizedCommand>> {
    let mut state = match elements.first() {
        Some(PathEl::MoveTo(p)) => State {
            prev_end: *p,
            prev_quad_ctrl: None,
            first: *p,
        },
        Some(_) => return Err(SvgParseError::MissingMoveTo.into()),
        None => return Err(SvgParseError::Empty.into()),
    };
    let mut out = Vec::with_capacity(elements.len());
    for &el in elements {
        let (cmd, quad_ctrl) = state.rewrite(el);
        if let NormalizedCommand::MoveTo(p) = cmd {
            state.first = p;
        }
        state.prev_end = cmd.end_point();
        state.prev_quad_ctrl = quad_ctrl;
        out.push(cmd);
    }
    Ok(out)
}

/// A path normalized to move-tos and cubic segments.
///
/// ```
/// use bezier_offset::SvgPath;
///
/// let path = SvgPath::parse("M 0 0 L 1 1").unwrap();
/// assert_eq!(path.to_svg(), "M 0 0 C 1 1 1 1 1 1");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SvgPath {
    commands: Vec<NormalizedCommand>,
    config: KernelConfig,
}

impl SvgPath {
    /// Parse and normalize path text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed or unsupported input.
    pub fn parse(text: &str) -> Result<SvgPath> {
        SvgPath::parse_with_config(text, KernelConfig::default())
    }

    /// Parse and normalize, building curves with the given configuration.
    ///
    /// # Errors
    ///
    /// As [`SvgPath::parse`].
    pub fn parse_with_config(text: &str, config: KernelConfig) -> Result<SvgPath> {
        let elements = parse_elements(text)?;
        Ok(SvgPath {
            commands: normalize(&elements)?,
            config,
        })
    }

    /// The normalized commands.
    pub fn commands(&self) -> &[NormalizedCommand] {
        &self.commands
    }

    /// The canonical text, using only `M` and `C`.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// The cubic segments of every subpath, in order.
    ///
    /// Segments whose four points coincide are left out.
    pub fn cubics(&self) -> Vec<CubicBez> {
        self.subpath_cubics().into_iter().flatten().collect()
    }

    /// One curve per subpath that has at least one segment.
    pub fn subpaths(&self) -> Vec<Curve> {
        self.subpath_cubics()
            .into_iter()
            .filter_map(Curve::from_cubics)
            .collect()
    }

    /// The path as a single curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the path has no segments, or
    /// more than one subpath with segments.
    pub fn to_curves(&self) -> Result<Curve> {
        let mut subpaths = self.subpaths();
        match subpaths.len() {
            0 => Err(Error::invalid("the path has no curve segments")),
            1 => Ok(subpaths.remove(0)),
            n => Err(Error::invalid(format!(
                "the path has {n} subpaths; use `subpaths` to get each one"
            ))),
        }
    }

    fn subpath_cubics(&self) -> Vec<Vec<CubicBez>> {
        let mut subpaths: Vec<Vec<CubicBez>> = Vec::new();
        let mut current = Point::ZERO;
        for cmd in &self.commands {
            match *cmd {
                NormalizedCommand::MoveTo(p) => {
                    subpaths.push(Vec::new());
                    current = p;
                }
                NormalizedCommand::CurveTo(p1, p2, p3) => {
                    match CubicBez::from_array([current, p1, p2, p3], self.config) {
                        Ok(c) => {
                            if let Some(last) = subpaths.last_mut() {
                                last.push(c);
                            }
                        }
                        Err(_) => log::debug!("skipping zero-length segment at {current:?}"),
                    }
                    current = p3;
                }
            }
        }
        subpaths
    }
}

impl FromStr for SvgPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<SvgPath> {
        SvgPath::parse(s)
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.commands.iter();
        if let Some(cmd) = iter.next() {
            write!(f, "{cmd}")?;
        }
        for cmd in iter {
            write!(f, " {cmd}")?;
        }
        Ok(())
    }
}

/// A number formatted for path text.
///
/// This is the shortest representation that round-trips, never in
/// exponent form, with negative zero written as `0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SvgNum(pub(crate) f64);

impl fmt::Display for SvgNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, CommandKind, NormalizedCommand, PathEl, SvgNum, SvgPath};
    use crate::{Curve, Error, Point, SvgParseError};

    fn svg(text: &str) -> String {
        SvgPath::parse(text).unwrap().to_svg()
    }

    #[test]
    fn element_kinds() {
        let text = "M 0 0 L 1 1 H 2 V 3 C 1 1 2 2 3 3 S 4 4 5 5 Q 6 6 7 7 T 8 8 Z";
        let els = super::parse_elements(text).unwrap();
        let letters: String = els.iter().map(|e| e.kind().letter()).collect();
        assert_eq!(letters, "MLHVCSQTZ");
        for e in &els {
            assert_eq!(CommandKind::from_letter(e.kind().letter()), Some(e.kind()));
        }
        assert_eq!(PathEl::Horiz(1.0).kind().arity(), 1);
    }

    #[test]
    fn line_to_degenerate_cubic() {
        let path = SvgPath::parse("M 0 0 L 1 1").unwrap();
        assert_eq!(path.to_svg(), "M 0 0 C 1 1 1 1 1 1");
        let Ok(Curve::Cubic(c)) = path.to_curves() else {
            panic!("expected a single cubic");
        };
        assert_eq!(c.p0(), Point::new(0., 0.));
        assert_eq!(c.p3(), Point::new(1., 1.));
        assert_eq!(c.flatness(), 0.0);
    }

    #[test]
    fn quad_elevation() {
        let path = SvgPath::parse("M 0 0 Q 2 4 4 0").unwrap();
        let c = path.cubics()[0];
        assert!(c.p1().distance(Point::new(4.0 / 3.0, 8.0 / 3.0)) < 1e-12);
        assert!(c.p2().distance(Point::new(8.0 / 3.0, 8.0 / 3.0)) < 1e-12);
        assert_eq!(c.p3(), Point::new(4., 0.));
    }

    #[test]
    fn smooth_quad_chain() {
        // The second control point is (2, 4) reflected through (4, 0).
        let a = SvgPath::parse("M 0 0 Q 2 4 4 0 T 8 0").unwrap();
        let b = SvgPath::parse("M 0 0 Q 2 4 4 0 Q 6 -4 8 0").unwrap();
        assert_eq!(a.commands(), b.commands());
        // T after T keeps reflecting.
        let a = SvgPath::parse("M 0 0 Q 2 4 4 0 T 8 0 T 12 0").unwrap();
        let b = SvgPath::parse("M 0 0 Q 2 4 4 0 Q 6 -4 8 0 Q 10 4 12 0").unwrap();
        assert_eq!(a.commands(), b.commands());
        // Without a preceding quadratic the control is the current point.
        let a = SvgPath::parse("M 0 0 L 4 0 T 8 0").unwrap();
        let b = SvgPath::parse("M 0 0 L 4 0 Q 4 0 8 0").unwrap();
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn smooth_cubic() {
        assert_eq!(svg("M 1 2 S 3 4 5 6"), "M 1 2 C 1 2 3 4 5 6");
        assert_eq!(
            svg("M 0 0 C 1 1 2 1 3 0 S 5 -1 6 0"),
            "M 0 0 C 1 1 2 1 3 0 C 3 0 5 -1 6 0"
        );
    }

    #[test]
    fn horizontal_vertical() {
        assert_eq!(svg("M 1 2 H 5 V 7"), "M 1 2 C 5 2 5 2 5 2 C 5 7 5 7 5 7");
    }

    #[test]
    fn close_path() {
        assert_eq!(
            svg("M 0 0 L 4 0 L 4 4 Z"),
            "M 0 0 C 4 0 4 0 4 0 C 4 4 4 4 4 4 C 0 0 0 0 0 0"
        );
        // Closing at the start point adds a zero-length segment that is left
        // out of the curves.
        let path = SvgPath::parse("M 0 0 L 4 0 L 0 0 Z").unwrap();
        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.cubics().len(), 2);
    }

    #[test]
    fn subpaths() {
        let path = SvgPath::parse("M 0 0 L 1 0 L 1 1 M 5 5 C 6 6 7 6 8 5").unwrap();
        let subpaths = path.subpaths();
        assert_eq!(subpaths.len(), 2);
        assert!(matches!(&subpaths[0], Curve::Composite(c) if c.segments() == 2));
        assert!(matches!(subpaths[1], Curve::Cubic(_)));
        assert!(matches!(path.to_curves(), Err(Error::InvalidArgument(_))));
        let only_move = SvgPath::parse("M 1 1").unwrap();
        assert!(matches!(only_move.to_curves(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn repeated_groups() {
        assert_eq!(svg("M 0 0 1 1"), "M 0 0 C 1 1 1 1 1 1");
        assert_eq!(svg("M 0 0 H 1 2"), "M 0 0 C 1 0 1 0 1 0 C 2 0 2 0 2 0");
    }

    #[test]
    fn parse_failures() {
        for bad in ["", "M 0 0 A 1 1 0 0 1 2 2", "M 0 0 l 1 1", "L 0 0", "M 0 0 L x 1"] {
            assert!(matches!(SvgPath::parse(bad), Err(Error::Parse(_))), "{bad}");
        }
        assert_eq!(
            SvgPath::parse("M 0 0 L 1 1 a"),
            Err(Error::Parse(SvgParseError::RelativeCommand('a')))
        );
    }

    #[test]
    fn normalize_needs_move_to() {
        assert_eq!(
            normalize(&[PathEl::LineTo(Point::new(1., 1.))]),
            Err(Error::Parse(SvgParseError::MissingMoveTo))
        );
        assert_eq!(normalize(&[]), Err(Error::Parse(SvgParseError::Empty)));
    }

    #[test]
    fn command_values() {
        let path: SvgPath = "M 1 2 C 3 4 5 6 7 8".parse().unwrap();
        let cmds = path.commands();
        assert_eq!(cmds[0].command(), CommandKind::MoveTo);
        assert_eq!(cmds[0].values().as_slice(), &[1., 2.]);
        assert_eq!(cmds[1].command(), CommandKind::CurveTo);
        assert_eq!(cmds[1].values().as_slice(), &[3., 4., 5., 6., 7., 8.]);
        assert_eq!(cmds[1], NormalizedCommand::CurveTo((3., 4.).into(), (5., 6.).into(), (7., 8.).into()));
        assert_eq!(CommandKind::SmoothQuadTo.letter(), 'T');
        assert_eq!(CommandKind::CurveTo.arity(), 6);
    }

    #[test]
    fn number_format() {
        assert_eq!(SvgNum(-0.0).to_string(), "0");
        assert_eq!(SvgNum(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(SvgNum(-2.5).to_string(), "-2.5");
        assert_eq!(SvgNum(1e21).to_string(), "1000000000000000000000");
    }
}

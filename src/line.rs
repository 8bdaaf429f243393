// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::svg::SvgNum;
use crate::{IntoPoint, ParamCurve, Point, Result, Vec2};

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Create a new line from point-like values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// either value is not a finite point.
    pub fn try_new(p0: impl IntoPoint, p1: impl IntoPoint) -> Result<Line> {
        Ok(Line::new(p0.into_point()?, p1.into_point()?))
    }

    /// The length of the line.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The unit normal, the direction rotated a quarter turn.
    ///
    /// This is `NaN` for a zero-length line.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        (self.p1 - self.p0).normalize().turn_90()
    }

    /// The line moved a distance `d` along its normal.
    #[inline]
    #[must_use]
    pub fn offset(&self, d: f64) -> Line {
        let n = self.normal() * d;
        Line::new(self.p0 + n, self.p1 + n)
    }

    /// Intersect the lines through two segments.
    ///
    /// Returns `None` when either line has zero length or they are parallel.
    /// With `restrict_to_segments`, an intersection outside either segment is
    /// also `None`.
    pub fn intersection(a: &Line, b: &Line, restrict_to_segments: bool) -> Option<Point> {
        let da = a.p1 - a.p0;
        let db = b.p1 - b.p0;
        if da == Vec2::ZERO || db == Vec2::ZERO {
            return None;
        }
        let det = db.cross(da);
        if det == 0.0 {
            return None;
        }
        let diff = a.p0 - b.p0;
        let ua = diff.cross(db) / det;
        if restrict_to_segments {
            let ub = diff.cross(da) / det;
            if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
                return None;
            }
        }
        Some(a.p0 + da * ua)
    }

    /// Convert to an SVG path string.
    pub fn to_svg(&self, close_path: bool) -> String {
        let mut s = format!(
            "M {} {} L {} {}",
            SvgNum(self.p0.x),
            SvgNum(self.p0.y),
            SvgNum(self.p1.x),
            SvgNum(self.p1.y)
        );
        if close_path {
            s.push_str(" Z");
        }
        s
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Line, ParamCurve, Point};

    #[test]
    fn line_try_new() {
        let l = Line::try_new((1.0, 2.0), [3.0, 4.0]).unwrap();
        assert_eq!(l, Line::new((1.0, 2.0), (3.0, 4.0)));
        assert!(matches!(
            Line::try_new((f64::NAN, 0.0), (1.0, 1.0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Line::try_new((0.0, 0.0), (f64::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn line_intersection() {
        let a = Line::new((0.0, 0.0), (2.0, 2.0));
        let b = Line::new((0.0, 2.0), (2.0, 0.0));
        let p = Line::intersection(&a, &b, true).unwrap();
        assert!(p.distance(Point::new(1.0, 1.0)) < 1e-12);

        // Lines cross beyond the end of `c`.
        let c = Line::new((0.0, 2.0), (0.5, 1.5));
        assert!(Line::intersection(&a, &c, true).is_none());
        let p = Line::intersection(&a, &c, false).unwrap();
        assert!(p.distance(Point::new(1.0, 1.0)) < 1e-12);
    }

    #[test]
    fn line_intersection_degenerate() {
        let a = Line::new((0.0, 0.0), (1.0, 0.0));
        let parallel = Line::new((0.0, 1.0), (1.0, 1.0));
        let point = Line::new((3.0, 3.0), (3.0, 3.0));
        assert!(Line::intersection(&a, &parallel, false).is_none());
        assert!(Line::intersection(&a, &point, false).is_none());
    }

    #[test]
    fn line_offset() {
        let l = Line::new((0.0, 0.0), (4.0, 0.0));
        let o = l.offset(2.0);
        assert_eq!(o.p0, Point::new(0.0, 2.0));
        assert_eq!(o.p1, Point::new(4.0, 2.0));
        assert_eq!(l.length(), 4.0);
        assert_eq!(o.eval(0.5), Point::new(2.0, 2.0));
        assert_eq!(l.to_svg(false), "M 0 0 L 4 0");
        assert_eq!(o.to_svg(true), "M 0 2 L 4 2 Z");
    }
}

// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::param_curve::check_t;
use crate::point::{all_same, collect_points};
use crate::svg::SvgNum;
use crate::{CubicBez, Error, IntoPoint, KernelConfig, ParamCurve, Point, Result};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    p0: Point,
    p1: Point,
    p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a point is not finite or all
    /// three points coincide.
    pub fn new(p0: impl IntoPoint, p1: impl IntoPoint, p2: impl IntoPoint) -> Result<QuadBez> {
        QuadBez::checked([p0.into_point()?, p1.into_point()?, p2.into_point()?])
    }

    /// Create a quadratic from a sequence of exactly three point-likes.
    ///
    /// # Errors
    ///
    /// As [`QuadBez::new`], and for the wrong number of points.
    pub fn from_points<I>(points: I) -> Result<QuadBez>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        QuadBez::checked(collect_points(points, "a quadratic Bézier")?)
    }

    fn checked(points: [Point; 3]) -> Result<QuadBez> {
        if all_same(&points) {
            return Err(Error::invalid(
                "a quadratic Bézier cannot have all three points at the same location",
            ));
        }
        Ok(QuadBez::from_array(points))
    }

    pub(crate) fn from_array([p0, p1, p2]: [Point; 3]) -> QuadBez {
        QuadBez { p0, p1, p2 }
    }

    /// The start point.
    #[inline]
    pub fn p0(&self) -> Point {
        self.p0
    }

    /// The control point.
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// The end point.
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    ///
    /// ```
    /// use bezier_offset::{Point, QuadBez};
    ///
    /// let q = QuadBez::new((0.0, 0.0), (2.0, 4.0), (4.0, 0.0)).unwrap();
    /// let c = q.raise();
    /// assert_eq!(c.p0(), Point::new(0.0, 0.0));
    /// assert!(c.p1().distance(Point::new(4.0 / 3.0, 8.0 / 3.0)) < 1e-12);
    /// ```
    #[inline]
    pub fn raise(&self) -> CubicBez {
        self.raise_with_config(KernelConfig::default())
    }

    /// Same as [`QuadBez::raise`].
    #[inline]
    pub fn to_cubic(&self) -> CubicBez {
        self.raise()
    }

    /// Raise the order, building the cubic with the given configuration.
    pub fn raise_with_config(&self, config: KernelConfig) -> CubicBez {
        let [p0, p1, p2, p3] = raise(self.p0, self.p1, self.p2);
        CubicBez::from_parts(p0, p1, p2, p3, config)
    }

    /// The point at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `t` is a finite number in
    /// `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Result<Point> {
        Ok(self.eval(check_t(t)?))
    }

    /// Convert to an SVG path string.
    pub fn to_svg(&self, close_path: bool) -> String {
        let mut s = format!(
            "M {} {} Q {} {} {} {}",
            SvgNum(self.p0.x),
            SvgNum(self.p0.y),
            SvgNum(self.p1.x),
            SvgNum(self.p1.y),
            SvgNum(self.p2.x),
            SvgNum(self.p2.y)
        );
        if close_path {
            s.push_str(" Z");
        }
        s
    }
}

/// Degree elevation of the quadratic `(p0, p1, p2)`.
pub(crate) fn raise(p0: Point, p1: Point, p2: Point) -> [Point; 4] {
    [
        p0,
        p0 + (2.0 / 3.0) * (p1 - p0),
        p2 + (2.0 / 3.0) * (p1 - p2),
        p2,
    ]
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, KernelConfig, ParamCurve, Point, QuadBez};

    #[test]
    fn quadbez_raise() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8)).unwrap();
        let c = q.raise();
        for i in 0..=10 {
            let t = (i as f64) * 0.1;
            assert!((q.eval(t) - c.eval(t)).hypot() < 1e-12);
        }
        assert_eq!(c.p3(), q.p2());
    }

    #[test]
    fn quadbez_elevation_values() {
        let c = QuadBez::new((0., 0.), (2., 4.), (4., 0.)).unwrap().to_cubic();
        assert!(c.p1().distance(Point::new(4.0 / 3.0, 8.0 / 3.0)) < 1e-12);
        assert!(c.p2().distance(Point::new(8.0 / 3.0, 8.0 / 3.0)) < 1e-12);
    }

    #[test]
    fn quadbez_raise_with_config() {
        let config = KernelConfig::new().with_flatness_tolerance(50.0);
        let q = QuadBez::new((0., 0.), (2., 4.), (4., 0.)).unwrap();
        let c = q.raise_with_config(config);
        assert_eq!(c.config(), config);
        assert_eq!(c.points(), q.raise().points());
        // Flatness 256/9 is over the default tolerance but within this one.
        assert!(c.is_sufficiently_flat());
        assert!(!q.raise().is_sufficiently_flat());
    }

    #[test]
    fn quadbez_construction() {
        assert!(matches!(
            QuadBez::new((1., 1.), (1., 1.), (1., 1.)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(QuadBez::from_points([(0., 0.), (1., 1.)]).is_err());
        let q = QuadBez::from_points([[0., 0.], [1., 1.], [2., 0.]]).unwrap();
        assert_eq!(q.point_at(0.5).unwrap(), Point::new(1.0, 0.5));
        assert!(q.point_at(2.0).is_err());
    }

    #[test]
    fn quadbez_svg() {
        let q = QuadBez::new((0., 0.), (2., 4.), (4., -0.5)).unwrap();
        assert_eq!(q.to_svg(false), "M 0 0 Q 2 4 4 -0.5");
        assert_eq!(q.to_svg(true), "M 0 0 Q 2 4 4 -0.5 Z");
    }
}

// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::param_curve::check_t;
use crate::point::{all_same, collect_points};
use crate::svg::SvgNum;
use crate::{
    CompositeBez, Error, IntoPoint, KernelConfig, ParamCurve, Point, QuadBez, Result, Vec2,
};

/// A single cubic Bézier segment.
///
/// The length estimate and flatness are computed once, at construction, and
/// the flatness test uses the [`KernelConfig`] the curve was built with.
#[derive(Clone, Copy, Debug)]
pub struct CubicBez {
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    length: f64,
    flatness: f64,
    config: KernelConfig,
}

/// The unit normal of a curve at some parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    /// The unit tangent rotated a quarter turn.
    ///
    /// `NaN` where the derivative vanishes.
    pub direction: Vec2,
    /// Slope `dy / dx` of the tangent.
    pub slope: f64,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    ///
    /// ```
    /// use bezier_offset::CubicBez;
    ///
    /// let c = CubicBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)).unwrap();
    /// assert!(c.length() > 4.0);
    /// assert!(CubicBez::new((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0)).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a point is not finite or all
    /// four points coincide.
    pub fn new(
        p0: impl IntoPoint,
        p1: impl IntoPoint,
        p2: impl IntoPoint,
        p3: impl IntoPoint,
    ) -> Result<CubicBez> {
        let points = [p0.into_point()?, p1.into_point()?, p2.into_point()?, p3.into_point()?];
        CubicBez::from_array(points, KernelConfig::default())
    }

    /// Create a cubic from a sequence of exactly four point-likes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for the wrong number of points, a
    /// point that is not finite, or four identical points.
    pub fn from_points<I>(points: I) -> Result<CubicBez>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        CubicBez::with_config(points, KernelConfig::default())
    }

    /// Create a cubic that uses the given tolerance configuration.
    ///
    /// # Errors
    ///
    /// As [`CubicBez::from_points`].
    pub fn with_config<I>(points: I, config: KernelConfig) -> Result<CubicBez>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        CubicBez::from_array(collect_points(points, "a cubic Bézier")?, config)
    }

    pub(crate) fn from_array(points: [Point; 4], config: KernelConfig) -> Result<CubicBez> {
        if all_same(&points) {
            return Err(Error::invalid(
                "a cubic Bézier cannot have all four points at the same location",
            ));
        }
        let [p0, p1, p2, p3] = points;
        Ok(CubicBez::from_parts(p0, p1, p2, p3, config))
    }

    /// Caller guarantees the points are finite and not all equal.
    pub(crate) fn from_parts(p0: Point, p1: Point, p2: Point, p3: Point, config: KernelConfig) -> CubicBez {
        let chord = (p3 - p0).hypot();
        let polygon = (p1 - p0).hypot() + (p2 - p1).hypot() + (p3 - p2).hypot();
        CubicBez {
            p0,
            p1,
            p2,
            p3,
            length: 0.5 * (chord + polygon),
            flatness: flatness(p0, p1, p2, p3),
            config,
        }
    }

    /// The start point.
    #[inline]
    pub fn p0(&self) -> Point {
        self.p0
    }

    /// The first control point.
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// The second control point.
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// The end point.
    #[inline]
    pub fn p3(&self) -> Point {
        self.p3
    }

    /// All four points, in order.
    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// The two control points.
    #[inline]
    pub fn control_points(&self) -> [Point; 2] {
        [self.p1, self.p2]
    }

    /// Heuristic length: the mean of the chord and the control polygon.
    ///
    /// This is an upper-biased estimate of arc length, not arc length itself.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// How far the control points stray from the chord.
    ///
    /// This is the square of the summed perpendicular distances of the two
    /// control points from the chord line, so it is in squared coordinate
    /// units.
    #[inline]
    pub fn flatness(&self) -> f64 {
        self.flatness
    }

    /// Is the flatness within the configured tolerance?
    #[inline]
    pub fn is_sufficiently_flat(&self) -> bool {
        self.flatness <= self.config.flatness_tolerance()
    }

    /// The configuration this curve was built with.
    #[inline]
    pub fn config(&self) -> KernelConfig {
        self.config
    }

    /// Subdivide into halves, using de Casteljau.
    ///
    /// The split is exact, and both halves keep this curve's configuration.
    pub fn subdivide(&self) -> CompositeBez {
        let (first, second) = self.split();
        CompositeBez::from_pair(first, second)
    }

    pub(crate) fn split(&self) -> (CubicBez, CubicBez) {
        let a = self.p0.midpoint(self.p1);
        let b = self.p1.midpoint(self.p2);
        let c = self.p2.midpoint(self.p3);
        let d = a.midpoint(b);
        let e = b.midpoint(c);
        let m = d.midpoint(e);
        (
            CubicBez::from_parts(self.p0, a, d, m, self.config),
            CubicBez::from_parts(m, e, c, self.p3, self.config),
        )
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

    /// The first derivative at parameter `t`.
    ///
    /// # Errors
    ///
    /// As [`CubicBez::point_at`].
    pub fn derivative_at(&self, t: f64) -> Result<Vec2> {
        Ok(self.eval_deriv(check_t(t)?))
    }

    /// The unit normal at parameter `t`, with the tangent's slope.
    ///
    /// # Errors
    ///
    /// As [`CubicBez::point_at`].
    pub fn normal_at(&self, t: f64) -> Result<Normal> {
        let d = self.derivative_at(t)?;
        Ok(Normal {
            direction: d.normalize().turn_90(),
            slope: d.y / d.x,
        })
    }

    pub(crate) fn eval_deriv(&self, t: f64) -> Vec2 {
        let (a, b, c) = self.deriv_coeffs();
        (a * t + b) * t + c
    }

    /// Coefficients of the derivative as a polynomial in power basis, so
    /// that `B'(t) = a t² + b t + c`.
    pub(crate) fn deriv_coeffs(&self) -> (Vec2, Vec2, Vec2) {
        deriv_coeffs(self.p0, self.p1, self.p2, self.p3)
    }

    /// Reduce to a quadratic Bézier by intersecting the end tangents.
    ///
    /// This round-trips [`QuadBez::to_cubic`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] when the tangent rays from the two ends
    /// do not meet ahead of both endpoints, or do not meet at all.
    pub fn to_quadratic(&self) -> Result<QuadBez> {
        let v0 = self.p1 - self.p0;
        let v1 = self.p2 - self.p3;
        let d = self.p3 - self.p0;
        let det = v1.x * v0.y - v1.y * v0.x;
        let u = (d.y * v1.x - d.x * v1.y) / det;
        let v = (d.y * v0.x - d.x * v0.y) / det;
        if !(u.is_finite() && v.is_finite()) {
            return Err(Error::Conversion("the end tangents are parallel"));
        }
        if u < 0.0 || v < 0.0 {
            return Err(Error::Conversion("the end tangents diverge"));
        }
        let ctrl = self.p0 + v0 * u;
        if !ctrl.is_finite() {
            return Err(Error::Conversion("the end tangents do not intersect"));
        }
        if ctrl == self.p0 && ctrl == self.p3 {
            return Err(Error::Conversion("the quadratic would be a single point"));
        }
        Ok(QuadBez::from_array([self.p0, ctrl, self.p3]))
    }

    /// Convert to an SVG path string.
    ///
    /// ```
    /// use bezier_offset::CubicBez;
    ///
    /// let c = CubicBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)).unwrap();
    /// assert_eq!(c.to_svg(false), "M 0 0 C 1 2 3 2 4 0");
    /// ```
    pub fn to_svg(&self, close_path: bool) -> String {
        let mut s = format!("M {} {} ", SvgNum(self.p0.x), SvgNum(self.p0.y));
        self.write_curve_to(&mut s);
        if close_path {
            s.push_str(" Z");
        }
        s
    }

    /// Append `C x1 y1 x2 y2 x3 y3`.
    pub(crate) fn write_curve_to(&self, s: &mut String) {
        use core::fmt::Write;
        // Writing to a String does not fail.
        let _ = write!(
            s,
            "C {} {} {} {} {} {}",
            SvgNum(self.p1.x),
            SvgNum(self.p1.y),
            SvgNum(self.p2.x),
            SvgNum(self.p2.y),
            SvgNum(self.p3.x),
            SvgNum(self.p3.y)
        );
    }
}

pub(crate) fn deriv_coeffs(p0: Point, p1: Point, p2: Point, p3: Point) -> (Vec2, Vec2, Vec2) {
    let (p0, p1, p2, p3) = (p0.to_vec2(), p1.to_vec2(), p2.to_vec2(), p3.to_vec2());
    let a = 3.0 * (p3 - p0 + 3.0 * (p1 - p2));
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);
    (a, b, c)
}

/// Deviation of the control points from the chord.
///
/// With `d = p3 - p0`, each control point contributes `|(pi - p3) × d|`,
/// its distance from the chord line scaled by the chord length; the sum is
/// squared and divided by the squared chord length. For a closed chord the
/// distances are taken from the start point instead.
fn flatness(p0: Point, p1: Point, p2: Point, p3: Point) -> f64 {
    let d = p3 - p0;
    let chord2 = d.hypot2();
    if chord2 == 0.0 {
        let e = (p1 - p0).hypot() + (p2 - p0).hypot();
        return e * e;
    }
    let d1 = (p1 - p3).cross(d).abs();
    let d2 = (p2 - p3).cross(d).abs();
    (d1 + d2) * (d1 + d2) / chord2
}

impl PartialEq for CubicBez {
    fn eq(&self, other: &CubicBez) -> bool {
        self.points() == other.points()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform cubic B-splines, as chains of cubic Béziers.

use crate::linalg::{clean_decimal, spline_coefficient_matrix, Matrix, DEFAULT_PRECISION};
use crate::{CompositeBez, CubicBez, Error, IntoPoint, KernelConfig, Point, Result};

/// A uniform cubic B-spline.
///
/// The spline starts at the first control point and ends at the last one.
/// Span `i` is the cubic with control points `2/3 b[i] + 1/3 b[i+1]` and
/// `1/3 b[i] + 2/3 b[i+1]`, ending at `1/6 b[i] + 2/3 b[i+1] + 1/6 b[i+2]`.
#[derive(Clone, Debug, PartialEq)]
pub struct BSpline {
    control_points: Vec<Point>,
    curves: CompositeBez,
}

impl BSpline {
    /// Create a spline from at least three control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for fewer than three points, a
    /// point that is not finite, or a span whose points all coincide.
    pub fn new<I>(control_points: I) -> Result<BSpline>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        BSpline::with_config(control_points, KernelConfig::default())
    }

    /// Create a spline whose segments use the given configuration.
    ///
    /// # Errors
    ///
    /// As [`BSpline::new`].
    pub fn with_config<I>(control_points: I, config: KernelConfig) -> Result<BSpline>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        BSpline::from_vec(collect_at_least_3(control_points)?, config)
    }

    /// Create the spline that passes through every one of `points`.
    ///
    /// ```
    /// use bezier_offset::{BSpline, Point};
    ///
    /// let s = BSpline::interpolate([(0.0, 0.0), (1.0, 2.0), (3.0, 1.0), (4.0, 3.0)]).unwrap();
    /// assert_eq!(s.curves().len(), 3);
    /// assert!(s.curves()[1].p0().distance(Point::new(1.0, 2.0)) < 1e-9);
    /// ```
    ///
    /// # Errors
    ///
    /// As [`BSpline::new`]. The linear solve itself cannot fail, as the
    /// system is diagonally dominant.
    pub fn interpolate<I>(points: I) -> Result<BSpline>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        BSpline::interpolate_with_config(points, KernelConfig::default())
    }

    /// Interpolate, building segments with the given configuration.
    ///
    /// # Errors
    ///
    /// As [`BSpline::interpolate`].
    pub fn interpolate_with_config<I>(points: I, config: KernelConfig) -> Result<BSpline>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        let s = collect_at_least_3(points)?;
        let last = s.len() - 1;
        let n = last - 1;
        // Row j is the knot at s[j + 1]: b[j] + 4 b[j + 1] + b[j + 2] = 6 s[j + 1],
        // with the fixed end control points moved to the right hand side.
        let rows = (0..n)
            .map(|j| {
                let mut v = 6.0 * s[j + 1].to_vec2();
                if j == 0 {
                    v -= s[0].to_vec2();
                }
                if j == n - 1 {
                    v -= s[last].to_vec2();
                }
                [v.x, v.y]
            })
            .collect::<Vec<_>>();
        let interior = spline_coefficient_matrix(n).solve(&Matrix::from_rows(&rows)?)?;
        let clean = |v: f64| clean_decimal(v, DEFAULT_PRECISION);
        let mut control_points = Vec::with_capacity(s.len());
        control_points.push(s[0]);
        control_points.extend(
            (0..n).map(|j| Point::new(clean(interior[(j, 0)]), clean(interior[(j, 1)]))),
        );
        control_points.push(s[last]);
        BSpline::from_vec(control_points, config)
    }

    fn from_vec(b: Vec<Point>, config: KernelConfig) -> Result<BSpline> {
        let spans = b.len() - 1;
        let mut curves: Vec<CubicBez> = Vec::with_capacity(spans);
        for i in 0..spans {
            let (bi, bj) = (b[i].to_vec2(), b[i + 1].to_vec2());
            let start = curves.last().map_or(b[0], CubicBez::p3);
            let end = if i == spans - 1 {
                b[i + 1]
            } else {
                (bi * (1.0 / 6.0) + bj * (2.0 / 3.0) + b[i + 2].to_vec2() * (1.0 / 6.0)).to_point()
            };
            let p1 = (bi * (2.0 / 3.0) + bj * (1.0 / 3.0)).to_point();
            let p2 = (bi * (1.0 / 3.0) + bj * (2.0 / 3.0)).to_point();
            curves.push(CubicBez::from_array([start, p1, p2, end], config)?);
        }
        Ok(BSpline {
            control_points: b,
            curves: CompositeBez::new(curves)?,
        })
    }

    /// The control points.
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// The cubic spans, in order.
    pub fn curves(&self) -> &[CubicBez] {
        self.curves.curves()
    }

    /// The spans as a composite curve.
    pub fn to_composite(&self) -> CompositeBez {
        self.curves.clone()
    }

    /// Convert to an SVG path string.
    pub fn to_svg(&self, close_path: bool) -> String {
        self.curves.to_svg(close_path)
    }
}

fn collect_at_least_3<I>(points: I) -> Result<Vec<Point>>
where
    I: IntoIterator,
    I::Item: IntoPoint,
{
    let points = points
        .into_iter()
        .map(IntoPoint::into_point)
        .collect::<Result<Vec<_>>>()?;
    if points.len() < 3 {
        return Err(Error::invalid(format!(
            "a B-spline needs at least 3 points, got {}",
            points.len()
        )));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use crate::{BSpline, Error, ParamCurve, Point};

    #[test]
    fn bspline_spans() {
        let s = BSpline::new([(0., 0.), (3., 3.), (6., 0.)]).unwrap();
        let c = s.curves();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].p0(), Point::new(0., 0.));
        assert!(c[0].p1().distance(Point::new(1., 1.)) < 1e-12);
        assert!(c[0].p2().distance(Point::new(2., 2.)) < 1e-12);
        // (0, 0) / 6 + (3, 3) * 2 / 3 + (6, 0) / 6
        assert!(c[0].p3().distance(Point::new(3., 2.)) < 1e-12);
        assert_eq!(c[1].p0(), c[0].p3());
        assert_eq!(c[1].p3(), Point::new(6., 0.));
        assert_eq!(s.control_points().len(), 3);
    }

    #[test]
    fn bspline_too_few_points() {
        assert!(matches!(
            BSpline::new([(0., 0.), (1., 1.)]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(BSpline::interpolate([(0., 0.), (1., 1.)]).is_err());
    }

    #[test]
    fn interpolate_through_points() {
        let pts = [(0., 0.), (2., 3.), (5., 1.), (7., 4.), (9., -2.), (12., 0.)].map(Point::from);
        let s = BSpline::interpolate(pts).unwrap();
        assert_eq!(s.curves().len(), pts.len() - 1);
        for (c, p) in s.curves().iter().zip(pts) {
            assert!(c.start().distance(p) < 1e-8, "{:?} vs {p:?}", c.start());
        }
        assert_eq!(s.curves().last().unwrap().end(), pts[5]);
    }

    #[test]
    fn interpolate_three_points() {
        // One unknown: 4 b1 = 6 s1 - s0 - s2.
        let s = BSpline::interpolate([(0., 0.), (2., 2.), (4., 0.)]).unwrap();
        assert_eq!(s.control_points()[1], Point::new(2., 3.));
        assert!(s.curves()[1].p0().distance(Point::new(2., 2.)) < 1e-12);
    }

    #[test]
    fn bspline_svg() {
        let s = BSpline::new([(0., 0.), (3., 3.), (6., 0.)]).unwrap();
        let text = s.to_svg(true);
        assert!(text.starts_with("M 0 0 C "));
        assert_eq!(text.matches(" C ").count(), 2);
        assert!(text.ends_with(" 6 0 Z"));
        assert_eq!(s.to_composite().segments(), 2);
    }
}

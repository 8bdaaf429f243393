// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point, and conversion of point-like values.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{Error, Result, Vec2};

/// A 2D point.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Convert this point into a `Vec2`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Linearly interpolate between two points.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self.to_vec2().lerp(other.to_vec2(), t).to_point()
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).hypot()
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A value that can be read as a point.
///
/// This is the single conversion used at every public boundary that accepts
/// points. It fails for values without exactly two finite coordinates.
pub trait IntoPoint {
    /// Convert into a [`Point`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value does not hold exactly
    /// two finite coordinates.
    fn into_point(self) -> Result<Point>;
}

/// Convert a point-like value into a [`Point`].
///
/// ```
/// use bezier_offset::{to_point, Point};
///
/// assert_eq!(to_point((1.0, 2.0)).unwrap(), Point::new(1.0, 2.0));
/// assert_eq!(to_point([3.0, 4.0]).unwrap(), Point::new(3.0, 4.0));
/// assert!(to_point(&[1.0, 2.0, 3.0][..]).is_err());
/// assert!(to_point((f64::NAN, 0.0)).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the value does not hold exactly two
/// finite coordinates.
#[inline]
pub fn to_point(value: impl IntoPoint) -> Result<Point> {
    value.into_point()
}

fn finite(x: f64, y: f64) -> Result<Point> {
    let p = Point::new(x, y);
    if p.is_finite() {
        Ok(p)
    } else {
        Err(Error::invalid(format!(
            "point coordinates must be finite, got {p:?}"
        )))
    }
}

impl IntoPoint for Point {
    #[inline]
    fn into_point(self) -> Result<Point> {
        finite(self.x, self.y)
    }
}

impl IntoPoint for &Point {
    #[inline]
    fn into_point(self) -> Result<Point> {
        finite(self.x, self.y)
    }
}

impl IntoPoint for Vec2 {
    #[inline]
    fn into_point(self) -> Result<Point> {
        finite(self.x, self.y)
    }
}

impl IntoPoint for (f64, f64) {
    #[inline]
    fn into_point(self) -> Result<Point> {
        finite(self.0, self.1)
    }
}

impl IntoPoint for [f64; 2] {
    #[inline]
    fn into_point(self) -> Result<Point> {
        finite(self[0], self[1])
    }
}

impl IntoPoint for &[f64] {
    fn into_point(self) -> Result<Point> {
        match *self {
            [x, y] => finite(x, y),
            _ => Err(Error::invalid(format!(
                "a point needs exactly 2 coordinates, got {}",
                self.len()
            ))),
        }
    }
}

#[cfg(feature = "mint")]
impl IntoPoint for mint::Point2<f64> {
    #[inline]
    fn into_point(self) -> Result<Point> {
        finite(self.x, self.y)
    }
}

/// Collect point-likes, requiring a fixed count.
pub(crate) fn collect_points<const N: usize, I>(points: I, what: &str) -> Result<[Point; N]>
where
    I: IntoIterator,
    I::Item: IntoPoint,
{
    let points = points
        .into_iter()
        .map(IntoPoint::into_point)
        .collect::<Result<Vec<_>>>()?;
    let len = points.len();
    points.try_into().map_err(|_| {
        Error::invalid(format!("{what} needs exactly {N} points, got {len}"))
    })
}

/// Are all the points the same?
pub(crate) fn all_same(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0] == w[1])
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Vec2) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign<Vec2> for Point {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

impl Sub<Point> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_points, to_point, Point};
    use crate::{Error, Vec2};

    #[test]
    fn point_arithmetic() {
        assert_eq!(
            Point::new(0., 0.) - Vec2::new(10., 0.),
            Point::new(-10., 0.)
        );
        assert_eq!(
            Point::new(0., 0.) - Point::new(-5., 101.),
            Vec2::new(5., -101.)
        );
        assert_eq!(
            Point::new(1., 1.).midpoint(Point::new(3., 5.)),
            Point::new(2., 3.)
        );
    }

    #[test]
    fn distance() {
        let p1 = Point::new(-11., 1.);
        let p2 = Point::new(-7., -2.);
        assert_eq!(p1.distance(p2), 5.);
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{}", p), "(0.12345, 9.87654)");
        assert_eq!(format!("{:.2}", p), "(0.12, 9.88)");
    }

    #[test]
    fn point_likes() {
        let expected = Point::new(1.5, -2.0);
        assert_eq!(to_point(expected), Ok(expected));
        assert_eq!(to_point((1.5, -2.0)), Ok(expected));
        assert_eq!(to_point([1.5, -2.0]), Ok(expected));
        assert_eq!(to_point(Vec2::new(1.5, -2.0)), Ok(expected));
        assert_eq!(to_point(&[1.5, -2.0][..]), Ok(expected));
        assert!(matches!(
            to_point(&[1.5][..]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(to_point((f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn collect_arity() {
        let ok: [Point; 2] = collect_points([(0., 0.), (1., 1.)], "test").unwrap();
        assert_eq!(ok[1], Point::new(1., 1.));
        let err = collect_points::<3, _>([(0., 0.), (1., 1.)], "test");
        assert!(matches!(err, Err(Error::InvalidArgument(_))));
    }
}

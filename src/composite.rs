// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chains of cubic segments.

use core::slice;

use crate::svg::SvgNum;
use crate::{CubicBez, Error, IntoPoint, KernelConfig, Point, Result};

/// A non-empty chain of cubic segments.
///
/// Consecutive segments are expected to meet end to start; this is not
/// checked.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeBez {
    curves: Vec<CubicBez>,
}

/// Either a single cubic or a chain of them.
#[derive(Clone, Debug, PartialEq)]
pub enum Curve {
    /// One segment.
    Cubic(CubicBez),
    /// Several segments.
    Composite(CompositeBez),
}

impl CompositeBez {
    /// Create a chain from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `curves` is empty.
    pub fn new(curves: Vec<CubicBez>) -> Result<CompositeBez> {
        if curves.is_empty() {
            return Err(Error::invalid("a composite curve needs at least one segment"));
        }
        Ok(CompositeBez { curves })
    }

    /// Create a chain from a flat list of point-likes, four per segment.
    ///
    /// ```
    /// use bezier_offset::CompositeBez;
    ///
    /// let pts = [(0., 0.), (1., 1.), (2., 1.), (3., 0.), (3., 0.), (4., -1.), (5., -1.), (6., 0.)];
    /// let c = CompositeBez::from_points(pts).unwrap();
    /// assert_eq!(c.segments(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless the count is a non-zero
    /// multiple of four and every group is a valid cubic.
    pub fn from_points<I>(points: I) -> Result<CompositeBez>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        CompositeBez::from_points_with_config(points, KernelConfig::default())
    }

    /// Create a chain from point-likes, building segments with `config`.
    ///
    /// # Errors
    ///
    /// As [`CompositeBez::from_points`].
    pub fn from_points_with_config<I>(points: I, config: KernelConfig) -> Result<CompositeBez>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        let points = points
            .into_iter()
            .map(IntoPoint::into_point)
            .collect::<Result<Vec<Point>>>()?;
        if points.is_empty() || points.len() % 4 != 0 {
            return Err(Error::invalid(format!(
                "a composite curve needs a non-zero multiple of 4 points, got {}",
                points.len()
            )));
        }
        let curves = points
            .chunks_exact(4)
            .map(|p| CubicBez::from_array([p[0], p[1], p[2], p[3]], config))
            .collect::<Result<Vec<_>>>()?;
        CompositeBez::new(curves)
    }

    pub(crate) fn from_pair(a: CubicBez, b: CubicBez) -> CompositeBez {
        CompositeBez { curves: vec![a, b] }
    }

    /// The segments, in order.
    #[inline]
    pub fn curves(&self) -> &[CubicBez] {
        &self.curves
    }

    /// Number of segments.
    #[inline]
    pub fn segments(&self) -> usize {
        self.curves.len()
    }

    /// Sum of the segments' heuristic lengths.
    pub fn length(&self) -> f64 {
        self.curves.iter().map(CubicBez::length).sum()
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> slice::Iter<'_, CubicBez> {
        self.curves.iter()
    }

    /// Push another segment onto the end.
    pub fn push(&mut self, curve: CubicBez) {
        self.curves.push(curve);
    }

    /// Convert to an SVG path string, with a single leading move-to.
    pub fn to_svg(&self, close_path: bool) -> String {
        let start = self.curves[0].p0();
        let mut s = format!("M {} {}", SvgNum(start.x), SvgNum(start.y));
        for c in &self.curves {
            s.push(' ');
            c.write_curve_to(&mut s);
        }
        if close_path {
            s.push_str(" Z");
        }
        s
    }

    /// Unwrap into the segments.
    pub fn into_curves(self) -> Vec<CubicBez> {
        self.curves
    }
}

impl<'a> IntoIterator for &'a CompositeBez {
    type Item = &'a CubicBez;
    type IntoIter = slice::Iter<'a, CubicBez>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl IntoIterator for CompositeBez {
    type Item = CubicBez;
    type IntoIter = std::vec::IntoIter<CubicBez>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.into_iter()
    }
}

impl Curve {
    /// A single cubic for one segment, a composite for more, `None` for none.
    pub fn from_cubics(mut curves: Vec<CubicBez>) -> Option<Curve> {
        match curves.len() {
            0 => None,
            1 => curves.pop().map(Curve::Cubic),
            _ => Some(Curve::Composite(CompositeBez { curves })),
        }
    }

    /// The segments, in order.
    pub fn cubics(&self) -> &[CubicBez] {
        match self {
            Curve::Cubic(c) => slice::from_ref(c),
            Curve::Composite(c) => c.curves(),
        }
    }

    /// Number of segments.
    pub fn segments(&self) -> usize {
        self.cubics().len()
    }

    /// Sum of the segments' heuristic lengths.
    pub fn length(&self) -> f64 {
        match self {
            Curve::Cubic(c) => c.length(),
            Curve::Composite(c) => c.length(),
        }
    }

    /// Convert to an SVG path string.
    pub fn to_svg(&self, close_path: bool) -> String {
        match self {
            Curve::Cubic(c) => c.to_svg(close_path),
            Curve::Composite(c) => c.to_svg(close_path),
        }
    }

    /// View as a composite, wrapping a single cubic.
    pub fn into_composite(self) -> CompositeBez {
        match self {
            Curve::Cubic(c) => CompositeBez { curves: vec![c] },
            Curve::Composite(c) => c,
        }
    }
}

impl From<CubicBez> for Curve {
    fn from(c: CubicBez) -> Curve {
        Curve::Cubic(c)
    }
}

impl From<CompositeBez> for Curve {
    fn from(c: CompositeBez) -> Curve {
        Curve::Composite(c)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CompositeBez, CubicBez, Curve, Error};

    fn two_segments() -> CompositeBez {
        CompositeBez::from_points([
            (0., 0.),
            (1., 2.),
            (3., 2.),
            (4., 0.),
            (4., 0.),
            (5., -2.),
            (7., -2.),
            (8., 0.),
        ])
        .unwrap()
    }

    #[test]
    fn composite_length() {
        let c = two_segments();
        assert_eq!(c.segments(), 2);
        let sum = c.curves()[0].length() + c.curves()[1].length();
        assert_eq!(c.length(), sum);
        assert_eq!(c.iter().count(), 2);
        assert_eq!((&c).into_iter().map(CubicBez::length).sum::<f64>(), sum);
    }

    #[test]
    fn composite_construction() {
        assert!(matches!(CompositeBez::new(vec![]), Err(Error::InvalidArgument(_))));
        let empty: [(f64, f64); 0] = [];
        assert!(CompositeBez::from_points(empty).is_err());
        assert!(CompositeBez::from_points([(0., 0.); 6]).is_err());
        // Second group is four identical points.
        let pts = [(0., 0.), (1., 1.), (2., 1.), (3., 0.), (3., 0.), (3., 0.), (3., 0.), (3., 0.)];
        assert!(CompositeBez::from_points(pts).is_err());
    }

    #[test]
    fn composite_svg() {
        let c = two_segments();
        assert_eq!(
            c.to_svg(false),
            "M 0 0 C 1 2 3 2 4 0 C 5 -2 7 -2 8 0"
        );
        assert!(c.to_svg(true).ends_with(" Z"));
        assert_eq!(Curve::from(c.clone()).to_svg(false), c.to_svg(false));
    }

    #[test]
    fn curve_shapes() {
        let c = two_segments();
        let first = c.curves()[0];
        assert_eq!(Curve::from_cubics(vec![]), None);
        assert_eq!(Curve::from_cubics(vec![first]), Some(Curve::Cubic(first)));
        let both = Curve::from_cubics(c.clone().into_curves()).unwrap();
        assert_eq!(both.segments(), 2);
        assert_eq!(both.into_composite(), c);
        assert_eq!(Curve::Cubic(first).into_composite().segments(), 1);
    }

    #[test]
    fn composite_push() {
        let mut c = CompositeBez::new(vec![two_segments().curves()[0]]).unwrap();
        c.push(two_segments().curves()[1]);
        assert_eq!(c, two_segments());
        assert_eq!(c.to_svg(false), "M 0 0 C 1 2 3 2 4 0 C 5 -2 7 -2 8 0");
    }
}

// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset curves.
//!
//! The offset of a cubic at a signed distance is not itself a cubic, so it is
//! approximated piecewise. The source is split into at most four subcurves,
//! each flat enough that one cubic can follow its offset. For each subcurve
//! the endpoints are moved along their normals, the end tangent directions
//! are kept, and the two tangent lengths are corrected by solving a small
//! linear system so the midpoint lands on the true offset with a matching
//! tangent.

use smallvec::{smallvec, SmallVec};

use crate::cubicbez::deriv_coeffs;
use crate::linalg::Matrix;
use crate::{CompositeBez, CubicBez, Curve, Error, ParamCurve, Point, Result, Vec2};

/// Relative tolerance for treating a subcurve as a straight line.
const STRAIGHT_TOLERANCE: f64 = 1e-9;

impl CubicBez {
    /// Approximate the curve at signed distance `d`.
    ///
    /// Positive `d` offsets towards the tangent rotated a quarter turn
    /// counterclockwise. The result is a single cubic when one subcurve
    /// suffices and a composite otherwise. Subcurves whose correction cannot
    /// be solved are left out, so the result is `None` if none could be.
    ///
    /// ```
    /// use bezier_offset::{CubicBez, Curve, Point};
    ///
    /// let c = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)).unwrap();
    /// let Some(Curve::Cubic(o)) = c.offset(2.0).unwrap() else { panic!() };
    /// assert_eq!(o.p0(), Point::new(0.0, 2.0));
    /// assert_eq!(o.p3(), Point::new(3.0, 2.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `d` is not finite.
    pub fn offset(&self, d: f64) -> Result<Option<Curve>> {
        Ok(Curve::from_cubics(self.offset_cubics(check_distance(d)?)))
    }

    fn offset_cubics(&self, d: f64) -> Vec<CubicBez> {
        self.offset_subcurves(d)
            .iter()
            .filter_map(|c| offset_subcurve(c, d))
            .collect()
    }

    /// The pieces the offset is built from, in parameter order.
    fn offset_subcurves(&self, d: f64) -> SmallVec<[CubicBez; 4]> {
        if self.is_sufficiently_flat() {
            return smallvec![*self];
        }
        let (a, b) = self.split();
        let min_length = d.abs() * self.config().offset_length_ratio();
        let usable = |h: &CubicBez| h.is_sufficiently_flat() && h.length() > min_length;
        if usable(&a) && usable(&b) {
            log::trace!("offsetting {} by {d} in halves", self.to_svg(false));
            return smallvec![a, b];
        }
        log::trace!("offsetting {} by {d} in quarters", self.to_svg(false));
        let (a0, a1) = a.split();
        let (b0, b1) = b.split();
        smallvec![a0, a1, b0, b1]
    }
}

impl CompositeBez {
    /// Offset every segment and chain the results, in order.
    ///
    /// Returns `None` when no segment produced an offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `d` is not finite.
    pub fn offset(&self, d: f64) -> Result<Option<CompositeBez>> {
        let d = check_distance(d)?;
        let curves = self.iter().flat_map(|c| c.offset_cubics(d)).collect();
        Ok(Curve::from_cubics(curves).map(Curve::into_composite))
    }
}

impl Curve {
    /// Offset a single cubic or a composite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `d` is not finite.
    pub fn offset(&self, d: f64) -> Result<Option<Curve>> {
        match self {
            Curve::Cubic(c) => c.offset(d),
            Curve::Composite(c) => Ok(c.offset(d)?.map(Curve::Composite)),
        }
    }
}

fn check_distance(d: f64) -> Result<f64> {
    if d.is_finite() {
        Ok(d)
    } else {
        Err(Error::invalid(format!(
            "offset distance must be a finite number, got {d}"
        )))
    }
}

/// Offset one flat subcurve, or `None` if the correction has no solution.
fn offset_subcurve(c: &CubicBez, d: f64) -> Option<CubicBez> {
    let [p0, p1, p2, p3] = c.points();
    if is_straight(c) {
        let n = (p3 - p0).normalize().turn_90() * d;
        return finish(c, [p0 + n, p1 + n, p2 + n, p3 + n]);
    }

    let s0 = end_tangent(p0, [p1, p2, p3]);
    let s3 = -end_tangent(p3, [p2, p1, p0]);
    let q0 = p0 + s0.normalize().turn_90() * d;
    let q3 = p3 + s3.normalize().turn_90() * d;

    let (a, b, cc) = deriv_coeffs(p0, p1, p2, p3);
    let dp = a * 0.25 + b * 0.5 + cc;
    let rc = c.eval(0.5) + dp.normalize().turn_90() * d;

    let naive = [q0, q0 + s0, q3 - s3, q3];
    let qc = Point::new(
        (naive[0].x + 3.0 * (naive[1].x + naive[2].x) + naive[3].x) * 0.125,
        (naive[0].y + 3.0 * (naive[1].y + naive[2].y) + naive[3].y) * 0.125,
    );
    let (na, nb, nc) = deriv_coeffs(naive[0], naive[1], naive[2], naive[3]);
    let tn = na * 0.25 + nb * 0.5 + nc;

    // Unknowns: the tangent length corrections at each end, and a
    // parameter shift along the midpoint tangent.
    let m = Matrix::from_rows(&[
        [0.375 * s0.x, -0.375 * s3.x, dp.x],
        [0.375 * s0.y, -0.375 * s3.y, dp.y],
        [0.75 * s0.cross(dp), 0.75 * s3.cross(dp), 0.0],
    ])
    .ok()?;
    let delta = rc - qc;
    let rhs = Matrix::from_rows(&[[delta.x], [delta.y], [tn.cross(dp)]]).ok()?;
    let x = match m.solve(&rhs) {
        Ok(x) => x,
        Err(e) => {
            log::debug!("dropping offset subcurve {}: {e}", c.to_svg(false));
            return None;
        }
    };
    let (dk0, dk3) = (x[(0, 0)], x[(1, 0)]);
    finish(c, [q0, q0 + s0 * (1.0 + dk0), q3 - s3 * (1.0 + dk3), q3])
}

/// Build the offset cubic, dropping results that are unusable.
fn finish(source: &CubicBez, points: [Point; 4]) -> Option<CubicBez> {
    if !points.iter().all(|p| p.is_finite()) {
        log::debug!("dropping non-finite offset of {}", source.to_svg(false));
        return None;
    }
    match CubicBez::from_array(points, source.config()) {
        Ok(c) => Some(c),
        Err(e) => {
            log::debug!("dropping offset of {}: {e}", source.to_svg(false));
            None
        }
    }
}

/// Are the control points on the chord?
fn is_straight(c: &CubicBez) -> bool {
    let chord = c.p3() - c.p0();
    if chord.hypot2() == 0.0 {
        return false;
    }
    let tolerance = STRAIGHT_TOLERANCE * c.length();
    c.flatness() <= tolerance * tolerance
}

/// The tangent at `p`, leaving towards `rest`.
///
/// This is the vector to the first control point, or when that coincides
/// with `p`, a third of the vector to the next distinct point.
fn end_tangent(p: Point, rest: [Point; 3]) -> Vec2 {
    let s = rest[0] - p;
    if s != Vec2::ZERO {
        return s;
    }
    rest[1..]
        .iter()
        .map(|&q| (q - p) / 3.0)
        .find(|&s| s != Vec2::ZERO)
        .unwrap_or(Vec2::ZERO)
}

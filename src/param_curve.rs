// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::Point;

/// A curve parametrized by a scalar.
///
/// Unlike the checked `point_at` methods on the concrete curve types, `eval`
/// does not validate `t`, so it can also be used to extrapolate.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// Check a curve parameter.
pub(crate) fn check_t(t: f64) -> crate::Result<f64> {
    if t.is_finite() && (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(crate::Error::invalid(format!(
            "parameter t must be a number 0 <= t <= 1, got {t}"
        )))
    }
}

// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerance configuration shared by curves and the offset engine.

/// Numeric policy for flatness tests and offset subdivision.
///
/// Every [`CubicBez`](crate::CubicBez) captures the configuration it was built
/// with, and the halves produced by subdividing it inherit that configuration.
/// Set it once before a batch of work rather than varying it between related
/// curves, since it decides where the offset engine refines.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KernelConfig {
    flatness_tolerance: f64,
    offset_length_ratio: f64,
}

impl KernelConfig {
    /// Default flatness tolerance.
    pub const DEFAULT_FLATNESS_TOLERANCE: f64 = 2.0;

    /// Default minimum ratio of subcurve length to offset distance.
    pub const DEFAULT_OFFSET_LENGTH_RATIO: f64 = 10.0;

    /// Create a configuration with the default values.
    #[inline]
    pub const fn new() -> Self {
        KernelConfig {
            flatness_tolerance: Self::DEFAULT_FLATNESS_TOLERANCE,
            offset_length_ratio: Self::DEFAULT_OFFSET_LENGTH_RATIO,
        }
    }

    /// The flatness at or below which a cubic counts as sufficiently flat.
    #[inline]
    pub fn flatness_tolerance(&self) -> f64 {
        self.flatness_tolerance
    }

    /// Set the flatness tolerance.
    ///
    /// Negative or non-finite values are ignored and logged.
    pub fn set_flatness_tolerance(&mut self, tolerance: f64) {
        if tolerance.is_finite() && tolerance >= 0.0 {
            self.flatness_tolerance = tolerance;
        } else {
            log::warn!("ignoring invalid flatness tolerance {tolerance}");
        }
    }

    /// Return a copy with the given flatness tolerance.
    #[must_use]
    pub fn with_flatness_tolerance(mut self, tolerance: f64) -> Self {
        self.set_flatness_tolerance(tolerance);
        self
    }

    /// How many times longer than the offset distance a half must be before
    /// the offset engine stops after one subdivision round.
    #[inline]
    pub fn offset_length_ratio(&self) -> f64 {
        self.offset_length_ratio
    }

    /// Set the offset length ratio.
    ///
    /// Negative or non-finite values are ignored and logged.
    pub fn set_offset_length_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio >= 0.0 {
            self.offset_length_ratio = ratio;
        } else {
            log::warn!("ignoring invalid offset length ratio {ratio}");
        }
    }

    /// Return a copy with the given offset length ratio.
    #[must_use]
    pub fn with_offset_length_ratio(mut self, ratio: f64) -> Self {
        self.set_offset_length_ratio(ratio);
        self
    }
}

impl Default for KernelConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::KernelConfig;

    #[test]
    fn defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.flatness_tolerance(), 2.0);
        assert_eq!(config.offset_length_ratio(), 10.0);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = KernelConfig::new().with_flatness_tolerance(0.5);
        assert_eq!(config.flatness_tolerance(), 0.5);
        config.set_flatness_tolerance(f64::NAN);
        config.set_flatness_tolerance(-1.0);
        assert_eq!(config.flatness_tolerance(), 0.5);
        config.set_offset_length_ratio(f64::INFINITY);
        assert_eq!(config.offset_length_ratio(), 10.0);
    }
}

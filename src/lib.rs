// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier geometry, with a focus on offset curves.
//!
//! The crate represents curves as point tuples, measures how far a cubic
//! strays from its chord, subdivides curves that are not flat enough, and
//! approximates the parallel curve at a signed distance. It also converts
//! between quadratic and cubic segments, chains segments into composites,
//! and normalizes a restricted SVG path grammar into cubic segments.
//!
//! # Examples
//!
//! Offsetting a path:
//! ```
//! use bezier_offset::SvgPath;
//!
//! let path = SvgPath::parse("M 0 0 C 10 20 30 20 40 0").unwrap();
//! let curve = path.to_curves().unwrap();
//! let outline = curve.offset(2.0).unwrap().unwrap();
//! assert!(outline.to_svg(false).starts_with("M "));
//! ```
//!
//! Every constructor validates its inputs and reports problems as an
//! [`Error`]:
//! ```
//! use bezier_offset::{CubicBez, Error};
//!
//! let err = CubicBez::from_points([(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument(_)));
//! ```
//!
//! # Configuration
//!
//! The flatness tolerance and the minimum length of offset subcurves live in
//! a [`KernelConfig`]. Each curve keeps the configuration it was built
//! with, and curves derived from it inherit the same one.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: subdivision decisions at trace
//! level, and offset subcurves or path segments that get dropped at debug
//! level. No logger is installed by this crate.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod bspline;
mod composite;
mod config;
mod cubicbez;
mod error;
pub mod linalg;
mod line;
mod offset;
mod param_curve;
mod point;
mod quadbez;
pub mod svg;
mod vec2;

pub use crate::bspline::*;
pub use crate::composite::*;
pub use crate::config::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::svg::SvgPath;
pub use crate::vec2::*;

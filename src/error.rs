// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Errors produced by curve construction, conversion and path parsing.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An argument had the wrong shape, arity or value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The path text could not be parsed.
    #[error("invalid SVG path: {0}")]
    Parse(#[from] SvgParseError),

    /// A quadratic/cubic conversion has no exact solution.
    #[error("cannot convert: {0}")]
    Conversion(&'static str),

    /// A matrix could not be inverted.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}

/// An error which can be returned when parsing an SVG path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SvgParseError {
    /// A number was expected.
    #[error("unable to parse a number")]
    Wrong,
    /// The input string ended while still expecting input.
    #[error("unexpected EOF")]
    UnexpectedEof,
    /// Encountered an unknown command letter.
    #[error("unknown command, \"{0}\"")]
    UnknownCommand(char),
    /// Relative (lowercase) commands are not supported.
    #[error("relative command \"{0}\" is not supported")]
    RelativeCommand(char),
    /// The elliptical arc command is not supported.
    #[error("the elliptical arc command is not supported")]
    UnsupportedArc,
    /// The path must begin with a `M` command.
    #[error("path must begin with a move-to")]
    MissingMoveTo,
    /// The path contained no commands.
    #[error("path is empty")]
    Empty,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small dense matrices.
//!
//! Just enough linear algebra for the offset correction (a 3×3 solve) and
//! B-spline interpolation (a tridiagonal system). Storage is row-major and
//! stays on the stack up to 3×3.

use core::fmt;
use core::ops::{Index, IndexMut, Mul};

use smallvec::SmallVec;

use crate::{Error, Result};

/// Precision used by [`clean_decimal`] when cleaning up inverted matrices.
pub const DEFAULT_PRECISION: i32 = 9;

/// A dense row-major matrix.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: SmallVec<[f64; 9]>,
}

impl Matrix {
    /// A matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: SmallVec::from_elem(0.0, rows * cols),
        }
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Matrix {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build a matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when there are no rows or the rows
    /// differ in length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(Error::invalid("a matrix needs at least one entry"));
        }
        let mut data = SmallVec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::invalid(format!(
                    "ragged matrix: expected {cols} columns, got {}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// A row as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Invert using Gauss-Jordan elimination with partial pivoting.
    ///
    /// A pivot is treated as zero when it is below `f64::EPSILON` times the
    /// largest magnitude in the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a non-square matrix, and
    /// [`Error::SingularMatrix`] when no usable pivot exists.
    pub fn invert(&self) -> Result<Matrix> {
        if self.rows != self.cols {
            return Err(Error::invalid("not a square matrix"));
        }
        let n = self.rows;
        let mut a = self.clone();
        let mut inv = Matrix::identity(n);
        let scale = self.data.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(Error::SingularMatrix);
        }
        let eps = scale * f64::EPSILON;

        for i in 0..n {
            let mut max = i;
            for k in i + 1..n {
                if a[(k, i)].abs() > a[(max, i)].abs() {
                    max = k;
                }
            }
            a.swap_rows(i, max);
            inv.swap_rows(i, max);

            let pivot = a[(i, i)];
            if pivot.abs() <= eps {
                return Err(Error::SingularMatrix);
            }
            for j in 0..n {
                a[(i, j)] /= pivot;
                inv[(i, j)] /= pivot;
            }

            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = a[(k, i)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    a[(k, j)] -= factor * a[(i, j)];
                    inv[(k, j)] -= factor * inv[(i, j)];
                }
            }
        }
        Ok(inv)
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the inner dimensions differ.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::invalid(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(self.product(other))
    }

    /// Solve `self · x = rhs` for `x`.
    ///
    /// # Errors
    ///
    /// As [`Matrix::invert`] and [`Matrix::try_mul`].
    pub fn solve(&self, rhs: &Matrix) -> Result<Matrix> {
        self.invert()?.try_mul(rhs)
    }

    fn product(&self, other: &Matrix) -> Matrix {
        let mut product = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                product[(i, j)] = (0..self.cols).map(|k| self[(i, k)] * other[(k, j)]).sum();
            }
        }
        product
    }

    /// Apply a function to every entry.
    #[must_use]
    pub fn map(mut self, f: impl Fn(f64) -> f64) -> Matrix {
        for v in &mut self.data {
            *v = f(*v);
        }
        self
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the inner dimensions differ; use [`Matrix::try_mul`] to get
    /// an error instead.
    fn mul(self, other: &Matrix) -> Matrix {
        assert_eq!(self.cols, other.rows, "matrix dimensions must agree");
        self.product(other)
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|i| self.row(i)))
            .finish()
    }
}

/// Round to `precision` decimal places.
///
/// Used to clear roundoff noise such as `0.9999999999` after inversion.
#[inline]
pub fn clean_decimal(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).round() / scale
}

/// The `n`×`n` tridiagonal matrix with 4 on the diagonal and 1 beside it.
///
/// This is the coefficient matrix for the interior control points of an
/// interpolating uniform cubic B-spline.
pub fn spline_coefficient_matrix(n: usize) -> Matrix {
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        m[(i, i)] = 4.0;
        if i > 0 {
            m[(i, i - 1)] = 1.0;
        }
        if i + 1 < n {
            m[(i, i + 1)] = 1.0;
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::{clean_decimal, spline_coefficient_matrix, Matrix, DEFAULT_PRECISION};
    use crate::Error;

    #[test]
    fn invert_roundtrip() {
        let m = Matrix::from_rows(&[[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]).unwrap();
        let inv = m.invert().unwrap();
        let id = (&m * &inv).map(|v| clean_decimal(v, DEFAULT_PRECISION));
        assert_eq!(id, Matrix::identity(3));
    }

    #[test]
    fn invert_needs_pivoting() {
        // Zero in the top-left corner; fails without a row swap.
        let m = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let inv = m.invert().unwrap();
        assert_eq!(inv, m);
    }

    #[test]
    fn singular() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(m.invert(), Err(Error::SingularMatrix));
        assert_eq!(Matrix::zeros(2, 2).invert(), Err(Error::SingularMatrix));
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
        assert!(matches!(m.invert(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn multiply() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0], [6.0]]).unwrap();
        let p = a.try_mul(&b).unwrap();
        assert_eq!((p.rows(), p.cols()), (2, 1));
        assert_eq!(p.row(0), &[17.0]);
        assert_eq!(p.row(1), &[39.0]);
        assert!(b.try_mul(&b).is_err());
    }

    #[test]
    fn ragged_rows() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
        assert!(Matrix::from_rows(&rows).is_err());
    }

    #[test]
    fn tridiagonal() {
        let m = spline_coefficient_matrix(3);
        assert_eq!(m.row(0), &[4.0, 1.0, 0.0]);
        assert_eq!(m.row(1), &[1.0, 4.0, 1.0]);
        assert_eq!(m.row(2), &[0.0, 1.0, 4.0]);
    }

    #[test]
    fn rounding() {
        assert_eq!(clean_decimal(0.999_999_999_97, 9), 1.0);
        assert_eq!(clean_decimal(1.234_567_891_2, 3), 1.235);
    }
}

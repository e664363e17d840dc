//! Row-major dense matrices and a direct solver.

use crate::types::LinalgError;
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// Row-major dense matrix.
///
/// # Example
///
/// ```
/// use numerics_core::math::linalg::DenseMatrix;
///
/// let mut m = DenseMatrix::<f64>::zeros(2, 2);
/// m[(0, 1)] = 3.0;
/// assert_eq!(m[(0, 1)], 3.0);
/// assert_eq!(m.n_rows(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: Float> {
    n_rows: usize,
    n_cols: usize,
    data: Vec<T>,
}

impl<T: Float> DenseMatrix<T> {
    /// Matrix of the given shape filled with zeros.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![T::zero(); n_rows * n_cols],
        }
    }

    /// Build a matrix from row vectors.
    ///
    /// # Returns
    ///
    /// * `Err(LinalgError::Empty)` - No rows, or rows without columns
    /// * `Err(LinalgError::DimensionMismatch)` - Ragged rows
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, LinalgError> {
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if n_cols == 0 {
            return Err(LinalgError::Empty);
        }
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(LinalgError::DimensionMismatch {
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            n_rows: rows.len(),
            n_cols,
            data,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// True when the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.n_rows == self.n_cols
    }

    /// Borrow row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, v: &[T]) -> Result<Vec<T>, LinalgError> {
        if v.len() != self.n_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.n_cols,
                got: v.len(),
            });
        }
        Ok((0..self.n_rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v)
                    .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            })
            .collect())
    }
}

impl<T: Float> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.n_cols + j]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.n_cols + j]
    }
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// The system is solved exactly (up to rounding); no iteration is involved.
/// Only an exactly zero or non-finite pivot marks the matrix singular, so
/// rows mixing unit entries with tiny or huge knot widths still solve.
///
/// # Returns
///
/// * `Ok(x)` - Solution vector
/// * `Err(LinalgError::DimensionMismatch)` - Non-square `A` or wrong `b` length
/// * `Err(LinalgError::Singular)` - No usable pivot
///
/// # Example
///
/// ```
/// use numerics_core::math::linalg::{solve, DenseMatrix};
///
/// let a = DenseMatrix::from_rows(&[vec![2.0_f64, 1.0], vec![1.0, 3.0]]).unwrap();
/// let x = solve(&a, &[3.0, 5.0]).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn solve<T: Float>(a: &DenseMatrix<T>, b: &[T]) -> Result<Vec<T>, LinalgError> {
    let n = a.n_rows();
    if n == 0 {
        return Err(LinalgError::Empty);
    }
    if !a.is_square() {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: a.n_cols(),
        });
    }
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let mut m = a.clone();
    let mut rhs = b.to_vec();

    // Forward elimination
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_val = m[(col, col)].abs();
        for row in (col + 1)..n {
            if m[(row, col)].abs() > pivot_val {
                pivot_val = m[(row, col)].abs();
                pivot_row = row;
            }
        }

        if pivot_val == T::zero() || !pivot_val.is_finite() {
            return Err(LinalgError::Singular { column: col });
        }

        if pivot_row != col {
            for j in 0..n {
                let tmp = m[(col, j)];
                m[(col, j)] = m[(pivot_row, j)];
                m[(pivot_row, j)] = tmp;
            }
            rhs.swap(col, pivot_row);
        }

        for row in (col + 1)..n {
            let factor = m[(row, col)] / m[(col, col)];
            if factor == T::zero() {
                continue;
            }
            for j in col..n {
                let delta = factor * m[(col, j)];
                m[(row, j)] = m[(row, j)] - delta;
            }
            rhs[row] = rhs[row] - factor * rhs[col];
        }
    }

    // Back substitution
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let tail = ((i + 1)..n).fold(T::zero(), |acc, j| acc + m[(i, j)] * x[j]);
        x[i] = (rhs[i] - tail) / m[(i, i)];
    }

    Ok(x)
}

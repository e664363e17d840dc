//! Interpolation points and validated point sets.

use super::error::ValidationError;
use num_traits::Float;
use std::cmp::Ordering;

/// A single `(x, y)` data point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T: Float> {
    /// Abscissa (knot position)
    pub x: T,
    /// Ordinate
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of points with pairwise distinct abscissas.
///
/// A `PointSet` is always sorted ascending by `x`; every builder downstream
/// indexes segments under that assumption. The only way to obtain one is
/// through [`PointSet::from_pairs`], which enforces both invariants.
///
/// # Example
///
/// ```
/// use numerics_core::types::PointSet;
///
/// let points = PointSet::from_pairs(&[2.0, 0.0, 1.0], &[2.0, 1.0, 3.0]).unwrap();
/// assert_eq!(points.xs(), vec![0.0, 1.0, 2.0]);
/// assert_eq!(points.ys(), vec![1.0, 3.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointSet<T: Float> {
    points: Vec<Point<T>>,
}

impl<T: Float> PointSet<T> {
    /// Pair `xs` with `ys`, sort by `x` and reject repeated abscissas.
    ///
    /// # Returns
    ///
    /// * `Err(ValidationError::EmptyOrMismatchedLengths)` - Empty or unequal slices
    /// * `Err(ValidationError::DuplicateAbscissa)` - Two points share an `x`
    pub fn from_pairs(xs: &[T], ys: &[T]) -> Result<Self, ValidationError> {
        if xs.is_empty() || ys.is_empty() || xs.len() != ys.len() {
            return Err(ValidationError::EmptyOrMismatchedLengths {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        let mut points: Vec<Point<T>> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        if let Some(pair) = points.windows(2).find(|w| w[0].x == w[1].x) {
            return Err(ValidationError::DuplicateAbscissa {
                x: pair[0].x.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self { points })
    }

    /// Sorted points.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Sorted abscissas.
    pub fn xs(&self) -> Vec<T> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Ordinates in abscissa order.
    pub fn ys(&self) -> Vec<T> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interval widths `h_i = x_{i+1} - x_i`.
    pub fn widths(&self) -> Vec<T> {
        self.points.windows(2).map(|w| w[1].x - w[0].x).collect()
    }

    /// Smallest and largest abscissa.
    pub fn domain(&self) -> (T, T) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }
}

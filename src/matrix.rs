use crate::error::MatrixError;
use crate::traits::Validate;
use serde::{Deserialize, Serialize};

/// A square matrix of `i32` values.
///
/// Elements are stored in row-major order.
/// The number of rows always equals the number
/// of columns, and is at least one.
///
/// # Arithmetic overflow
///
/// [`add`](SquareMatrix::add), [`multiply`](SquareMatrix::multiply)
/// and [`diagonal_sums`](SquareMatrix::diagonal_sums) use
/// wrapping (two's complement) arithmetic in every build profile.
/// Use [`checked_add`](SquareMatrix::checked_add) or
/// [`checked_multiply`](SquareMatrix::checked_multiply) to
/// detect overflow instead.
///
/// # Examples
///
/// ```
/// let a = matops::SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = matops::SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// assert_eq!((&a + &b).to_rows(), vec![vec![6, 8], vec![10, 12]]);
/// assert_eq!((&a * &b).to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// assert_eq!(a.diagonal_sums(), (5, 5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>")]
#[serde(into = "Vec<Vec<i32>>")]
pub struct SquareMatrix {
    data: Vec<i32>,
    nrows: usize,
}

impl SquareMatrix {
    /// Create an `nrows` by `nrows` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// If `nrows` is zero.
    pub fn zeros(nrows: usize) -> Self {
        assert!(nrows > 0, "a matrix must have at least one row");
        Self {
            data: vec![0; nrows * nrows],
            nrows,
        }
    }

    /// The identity matrix of dimension `nrows`.
    ///
    /// # Panics
    ///
    /// If `nrows` is zero.
    pub fn identity(nrows: usize) -> Self {
        let mut rv = Self::zeros(nrows);
        for i in 0..nrows {
            rv.set(i, i, 1);
        }
        rv
    }

    /// Build a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeError`] if `rows` is empty or
    /// any row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        rows.validate(MatrixError::ShapeError)?;
        let nrows = rows.len();
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            nrows,
        })
    }

    pub(crate) fn from_row_major(nrows: usize, data: Vec<i32>) -> Self {
        debug_assert_eq!(data.len(), nrows * nrows);
        Self { data, nrows }
    }

    /// The dimension `N` of this `N x N` matrix.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// The element at (`row`, `column`), or `None` if out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<i32> {
        if row < self.nrows && column < self.nrows {
            Some(self.data[row * self.nrows + column])
        } else {
            None
        }
    }

    fn set(&mut self, row: usize, column: usize, value: i32) {
        self.data[row * self.nrows + column] = value;
    }

    /// # Panics
    ///
    /// If `row` is out of range.
    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.nrows;
        let end = start + self.nrows;
        &self.data[start..end]
    }

    fn row_mut(&mut self, row: usize) -> &mut [i32] {
        let start = row * self.nrows;
        let end = start + self.nrows;
        &mut self.data[start..end]
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.data.chunks_exact(self.nrows)
    }

    /// Copy the matrix out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    fn assert_same_dimension(&self, other: &Self) {
        assert_eq!(
            self.nrows, other.nrows,
            "matrices must have the same dimension"
        );
    }

    /// Element-wise sum, wrapping on overflow.
    ///
    /// # Panics
    ///
    /// If the two matrices differ in dimension.
    pub fn add(&self, other: &Self) -> Self {
        self.assert_same_dimension(other);
        let mut rv = Self::zeros(self.nrows);
        for ((c, a), b) in rv.data.iter_mut().zip(&self.data).zip(&other.data) {
            *c = a.wrapping_add(*b);
        }
        rv
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Overflow`] naming the first cell,
    /// in row-major order, whose sum does not fit in `i32`.
    ///
    /// # Panics
    ///
    /// If the two matrices differ in dimension.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.assert_same_dimension(other);
        let mut rv = Self::zeros(self.nrows);
        for (index, ((c, a), b)) in rv
            .data
            .iter_mut()
            .zip(&self.data)
            .zip(&other.data)
            .enumerate()
        {
            *c = a.checked_add(*b).ok_or(MatrixError::Overflow {
                row: index / self.nrows,
                column: index % self.nrows,
            })?;
        }
        Ok(rv)
    }

    /// Matrix product, wrapping on overflow.
    ///
    /// Uses the textbook triple loop, iterating
    /// rows of `self`, then the shared index `k`,
    /// then columns of `other`.
    ///
    /// # Panics
    ///
    /// If the two matrices differ in dimension.
    pub fn multiply(&self, other: &Self) -> Self {
        self.assert_same_dimension(other);
        let n = self.nrows;
        let mut rv = Self::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let aik = self.data[i * n + k];
                for (c, b) in rv.row_mut(i).iter_mut().zip(other.row(k)) {
                    *c = c.wrapping_add(aik.wrapping_mul(*b));
                }
            }
        }
        rv
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Overflow`] if any product or running
    /// sum for a cell does not fit in `i32`.
    ///
    /// # Panics
    ///
    /// If the two matrices differ in dimension.
    pub fn checked_multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        self.assert_same_dimension(other);
        let n = self.nrows;
        let mut rv = Self::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let aik = self.data[i * n + k];
                for (j, (c, b)) in rv.row_mut(i).iter_mut().zip(other.row(k)).enumerate() {
                    let sum = aik
                        .checked_mul(*b)
                        .and_then(|product| c.checked_add(product))
                        .ok_or(MatrixError::Overflow { row: i, column: j })?;
                    *c = sum;
                }
            }
        }
        Ok(rv)
    }

    /// Sums of the main and secondary diagonals, in that order.
    ///
    /// When the dimension is odd, the center element lies
    /// on both diagonals and is counted in both sums.
    ///
    /// ```
    /// let m = matops::SquareMatrix::from_rows(vec![
    ///     vec![1, 2, 3],
    ///     vec![4, 5, 6],
    ///     vec![7, 8, 9],
    /// ])
    /// .unwrap();
    /// assert_eq!(m.diagonal_sums(), (15, 15));
    /// ```
    pub fn diagonal_sums(&self) -> (i32, i32) {
        let n = self.nrows;
        (0..n).fold((0_i32, 0_i32), |(main, secondary), i| {
            (
                main.wrapping_add(self.data[i * n + i]),
                secondary.wrapping_add(self.data[i * n + (n - 1 - i)]),
            )
        })
    }

    fn checked_index<I: TryInto<usize>>(&self, index: I) -> Option<usize> {
        index.try_into().ok().filter(|&i| i < self.nrows)
    }

    /// Exchange rows `r1` and `r2`.
    ///
    /// Returns `false`, leaving the matrix untouched, if
    /// either index is negative or not less than [`nrows`](SquareMatrix::nrows).
    /// Swapping a row with itself succeeds and changes nothing.
    ///
    /// ```
    /// let mut m = matops::SquareMatrix::identity(2);
    /// assert!(m.swap_rows(0, 1));
    /// assert_eq!(m.to_rows(), vec![vec![0, 1], vec![1, 0]]);
    /// assert!(!m.swap_rows(-1, 0));
    /// ```
    pub fn swap_rows<I: TryInto<usize>>(&mut self, r1: I, r2: I) -> bool {
        let (r1, r2) = match (self.checked_index(r1), self.checked_index(r2)) {
            (Some(r1), Some(r2)) => (r1, r2),
            _ => {
                log::debug!("row swap rejected for {0}x{0} matrix", self.nrows);
                return false;
            }
        };
        if r1 != r2 {
            let n = self.nrows;
            let (low, high) = (r1.min(r2), r1.max(r2));
            let (head, tail) = self.data.split_at_mut(high * n);
            head[low * n..(low + 1) * n].swap_with_slice(&mut tail[..n]);
        }
        true
    }

    /// Exchange columns `c1` and `c2` in every row.
    ///
    /// Bounds are checked exactly as for [`swap_rows`](SquareMatrix::swap_rows).
    pub fn swap_cols<I: TryInto<usize>>(&mut self, c1: I, c2: I) -> bool {
        let (c1, c2) = match (self.checked_index(c1), self.checked_index(c2)) {
            (Some(c1), Some(c2)) => (c1, c2),
            _ => {
                log::debug!("column swap rejected for {0}x{0} matrix", self.nrows);
                return false;
            }
        };
        for row in self.data.chunks_exact_mut(self.nrows) {
            row.swap(c1, c2);
        }
        true
    }

    /// Set the element at (`row`, `column`) to `value`.
    ///
    /// Returns `false`, leaving the matrix untouched,
    /// if either index is out of range.
    pub fn update_cell<I: TryInto<usize>>(&mut self, row: I, column: I, value: i32) -> bool {
        match (self.checked_index(row), self.checked_index(column)) {
            (Some(row), Some(column)) => {
                self.set(row, column, value);
                true
            }
            _ => {
                log::debug!("cell update rejected for {0}x{0} matrix", self.nrows);
                false
            }
        }
    }
}

impl_matrix_operator!(SquareMatrix, Add, add, add);
impl_matrix_operator!(SquareMatrix, Mul, mul, multiply);

impl std::ops::Index<(usize, usize)> for SquareMatrix {
    type Output = i32;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(column < self.nrows, "column index out of range");
        &self.data[row * self.nrows + column]
    }
}

impl TryFrom<Vec<Vec<i32>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<SquareMatrix> for Vec<Vec<i32>> {
    fn from(value: SquareMatrix) -> Self {
        value.to_rows()
    }
}

/// Element-wise sum of `a` and `b`.
/// See [`SquareMatrix::add`].
pub fn add(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    a.add(b)
}

/// Product of `a` and `b`.
/// See [`SquareMatrix::multiply`].
pub fn multiply(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    a.multiply(b)
}

/// See [`SquareMatrix::diagonal_sums`].
pub fn diagonal_sums(m: &SquareMatrix) -> (i32, i32) {
    m.diagonal_sums()
}

/// See [`SquareMatrix::swap_rows`].
pub fn swap_rows<I: TryInto<usize>>(m: &mut SquareMatrix, r1: I, r2: I) -> bool {
    m.swap_rows(r1, r2)
}

/// See [`SquareMatrix::swap_cols`].
pub fn swap_cols<I: TryInto<usize>>(m: &mut SquareMatrix, c1: I, c2: I) -> bool {
    m.swap_cols(c1, c2)
}

/// See [`SquareMatrix::update_cell`].
pub fn update_cell<I: TryInto<usize>>(m: &mut SquareMatrix, row: I, column: I, value: i32) -> bool {
    m.update_cell(row, column, value)
}

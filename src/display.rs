use crate::matrix::SquareMatrix;

/// Width of each printed element.
const FIELD_WIDTH: usize = 4;

/// Each element is right-aligned in a four character field,
/// one row per line.
///
/// ```
/// let m = matops::SquareMatrix::from_rows(vec![vec![1, -20], vec![300, 4]]).unwrap();
/// assert_eq!(m.to_string(), "   1 -20\n 300   4\n");
/// ```
impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{value:>FIELD_WIDTH$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A matrix printed under a heading that names its dimension.
///
/// Created by [`SquareMatrix::labeled`].
#[derive(Clone, Copy, Debug)]
pub struct Labeled<'m> {
    label: &'m str,
    matrix: &'m SquareMatrix,
}

impl SquareMatrix {
    /// Pair this matrix with a heading for printing.
    ///
    /// ```
    /// let m = matops::SquareMatrix::identity(2);
    /// assert_eq!(m.labeled("Matrix A").to_string(), "Matrix A (2x2):\n   1   0\n   0   1\n");
    /// ```
    pub fn labeled<'m>(&'m self, label: &'m str) -> Labeled<'m> {
        Labeled {
            label,
            matrix: self,
        }
    }
}

impl std::fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.matrix.nrows();
        writeln!(f, "{} ({}x{}):", self.label, n, n)?;
        write!(f, "{}", self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_values_are_not_truncated() {
        let m = SquareMatrix::from_rows(vec![vec![123456]]).unwrap();
        assert_eq!(m.to_string(), "123456\n");
    }
}

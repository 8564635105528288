use thiserror::Error;

/// Error type for this crate.
///
/// The matrix operations themselves never return this type
/// for bad indices: [`swap_rows`](crate::SquareMatrix::swap_rows),
/// [`swap_cols`](crate::SquareMatrix::swap_cols) and
/// [`update_cell`](crate::SquareMatrix::update_cell) report
/// failure with `false`.
/// Errors arise when building matrices, loading input, or
/// from the overflow-checked arithmetic.
///
/// # Example
///
/// The input declares `N = 2` but only provides
/// three values for the first matrix.
///
/// ```
/// let input = "2\n1 2 3";
/// assert!(matches!(matops::loads(input), Err(matops::MatrixError::InputError(_))));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// Non-square, empty, or mismatched matrices.
    #[error("{0}")]
    ShapeError(String),
    /// Malformed whitespace-delimited input.
    #[error("{0}")]
    InputError(String),
    /// Returned by the checked arithmetic when a cell overflows `i32`.
    #[error("integer overflow at row {row}, column {column}")]
    Overflow { row: usize, column: usize },
    #[error(transparent)]
    /// Errors from reading input or writing output.
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}

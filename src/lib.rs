//! # Operations on square integer matrices.
//!
//! The core type is [`SquareMatrix`], an `N x N` grid of `i32`.
//! It supports element-wise addition, multiplication,
//! diagonal sums, and three bounds-checked mutations
//! that report failure with `false` instead of panicking:
//!
//! * [`SquareMatrix::swap_rows`]
//! * [`SquareMatrix::swap_cols`]
//! * [`SquareMatrix::update_cell`]
//!
//! Pairs of matrices are read with [`loads`]/[`load`]
//! from whitespace-delimited text, or with [`loads_yaml`]/[`load_yaml`].
//!
//! ```
//! let mut pair = matops::loads("3  1 2 3 4 5 6 7 8 9  9 8 7 6 5 4 3 2 1").unwrap();
//! let a = pair.get_mut(matops::Choice::A);
//! assert!(a.swap_cols(0, 2));
//! assert_eq!(a.to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4], vec![9, 8, 7]]);
//! assert!(!a.update_cell(3, 0, 1));
//! ```

#![warn(rustdoc::broken_intra_doc_links)]

mod macros;

mod display;
mod error;
mod input;
mod matrix;
mod pair;
mod session;
mod traits;

pub use display::Labeled;
pub use error::MatrixError;
#[cfg(feature = "json")]
pub use input::{load_json, loads_json};
pub use input::{load, load_path, load_path_as, load_yaml, loads, loads_yaml, InputFormat};
pub use matrix::{add, diagonal_sums, multiply, swap_cols, swap_rows, update_cell, SquareMatrix};
pub use pair::{Choice, MatrixPair};
pub use session::{Outcome, Session, Summary};

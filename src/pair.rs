use crate::error::MatrixError;
use crate::matrix::SquareMatrix;
use crate::traits::Validate;
use serde::{Deserialize, Serialize};

/// Selects one matrix of a [`MatrixPair`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// Interpret a numeric selector typed by a user.
    ///
    /// `1` selects [`Choice::B`].
    /// Every other value selects [`Choice::A`].
    ///
    /// ```
    /// use matops::Choice;
    /// assert_eq!(Choice::from_selector(1), Choice::B);
    /// assert_eq!(Choice::from_selector(0), Choice::A);
    /// assert_eq!(Choice::from_selector(7), Choice::A);
    /// ```
    pub fn from_selector(selector: i32) -> Self {
        if selector == 1 {
            Self::B
        } else {
            Self::A
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::A => write!(f, "A"),
            Choice::B => write!(f, "B"),
        }
    }
}

/// The two matrices read from one input.
///
/// Both matrices always have the same dimension.
///
/// # Examples
///
/// ```
/// use matops::{Choice, MatrixPair, SquareMatrix};
///
/// let mut pair = MatrixPair::new(SquareMatrix::identity(2), SquareMatrix::zeros(2)).unwrap();
/// assert!(pair.get_mut(Choice::B).update_cell(0, 1, 5));
/// assert_eq!(pair.b().get(0, 1), Some(5));
/// assert_eq!(pair.a().get(0, 1), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PairTrampoline")]
pub struct MatrixPair {
    a: SquareMatrix,
    b: SquareMatrix,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PairTrampoline {
    a: SquareMatrix,
    b: SquareMatrix,
}

impl TryFrom<PairTrampoline> for MatrixPair {
    type Error = MatrixError;

    fn try_from(value: PairTrampoline) -> Result<Self, Self::Error> {
        Self::new(value.a, value.b)
    }
}

impl Validate for MatrixPair {
    fn validate<F: FnOnce(String) -> MatrixError>(&self, err: F) -> Result<(), MatrixError> {
        if self.a.nrows() == self.b.nrows() {
            Ok(())
        } else {
            let msg = format!(
                "matrices must have the same dimension, got {0}x{0} and {1}x{1}",
                self.a.nrows(),
                self.b.nrows()
            );
            Err(err(msg))
        }
    }
}

impl MatrixPair {
    /// # Errors
    ///
    /// [`MatrixError::ShapeError`] if `a` and `b`
    /// differ in dimension.
    pub fn new(a: SquareMatrix, b: SquareMatrix) -> Result<Self, MatrixError> {
        let rv = Self { a, b };
        rv.validate(MatrixError::ShapeError)?;
        Ok(rv)
    }

    /// The shared dimension of both matrices.
    pub fn nrows(&self) -> usize {
        self.a.nrows()
    }

    pub fn a(&self) -> &SquareMatrix {
        &self.a
    }

    pub fn b(&self) -> &SquareMatrix {
        &self.b
    }

    pub fn get(&self, choice: Choice) -> &SquareMatrix {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, choice: Choice) -> &mut SquareMatrix {
        match choice {
            Choice::A => &mut self.a,
            Choice::B => &mut self.b,
        }
    }

    /// Consume the pair, returning `(a, b)`.
    pub fn into_inner(self) -> (SquareMatrix, SquareMatrix) {
        (self.a, self.b)
    }

    /// Serialize to a `YAML` string.
    pub fn as_string(&self) -> Result<String, MatrixError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize to a `JSON` string.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn as_json_string(&self) -> Result<String, MatrixError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for MatrixPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let yaml = self.as_string().map_err(|_| std::fmt::Error)?;
        write!(f, "{yaml}")
    }
}

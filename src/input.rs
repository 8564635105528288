//! Reading a [`MatrixPair`] from text, `YAML`, or `JSON`.

use crate::error::MatrixError;
use crate::matrix::SquareMatrix;
use crate::pair::{Choice, MatrixPair};
use std::io::Read;
use std::path::Path;

/// The formats understood by [`load_path_as`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputFormat {
    /// `N`, then `N * N` integers for `A`, then `N * N` integers for `B`,
    /// separated by whitespace.
    Text,
    /// A mapping with keys `a` and `b`, each a list of rows.
    Yaml,
    /// As for [`InputFormat::Yaml`].
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension.
    ///
    /// `.yaml` and `.yml` are [`InputFormat::Yaml`].
    /// With the `json` feature, `.json` is `Json`.
    /// Anything else is [`InputFormat::Text`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            #[cfg(feature = "json")]
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

// Tokens are runs of bytes between ASCII whitespace.
// Input need not be UTF-8; a token that is not parses as nothing.
struct Tokens<'a> {
    remaining: &'a [u8],
}

impl<'a> Tokens<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { remaining: input }
    }

    fn next_token(&mut self) -> Option<&'a [u8]> {
        let start = self
            .remaining
            .iter()
            .position(|b| !b.is_ascii_whitespace())?;
        let rest = &self.remaining[start..];
        let end = rest
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(rest.len());
        self.remaining = &rest[end..];
        Some(&rest[..end])
    }

    fn next_integer<T: std::str::FromStr>(&mut self) -> Option<T> {
        self.next_token()
            .and_then(|token| std::str::from_utf8(token).ok())
            .and_then(|token| token.parse().ok())
    }

    fn next_matrix(&mut self, nrows: usize, choice: Choice) -> Result<SquareMatrix, MatrixError> {
        let not_enough =
            || MatrixError::InputError(format!("not enough numbers for matrix {choice}"));
        let len = nrows.checked_mul(nrows).ok_or_else(not_enough)?;
        let mut data = vec![];
        for _ in 0..len {
            data.push(self.next_integer::<i32>().ok_or_else(not_enough)?);
        }
        Ok(SquareMatrix::from_row_major(nrows, data))
    }
}

/// Load a [`MatrixPair`] from whitespace-delimited text.
///
/// The first value is the dimension `N`, which must be positive.
/// It is followed by the elements of `A` and then of `B`,
/// each in row-major order.
/// Anything after the last element of `B` is ignored.
///
/// # Errors
///
/// [`MatrixError::InputError`] if `N` is missing, not an integer,
/// or not positive, or if either matrix is short of values.
///
/// # Examples
///
/// ```
/// let pair = matops::loads("2\n1 2\n3 4\n5 6\n7 8\n").unwrap();
/// assert_eq!(pair.nrows(), 2);
/// assert_eq!(pair.b().to_rows(), vec![vec![5, 6], vec![7, 8]]);
/// ```
pub fn loads(input: &str) -> Result<MatrixPair, MatrixError> {
    loads_bytes(input.as_bytes())
}

fn loads_bytes(input: &[u8]) -> Result<MatrixPair, MatrixError> {
    let mut tokens = Tokens::new(input);
    let nrows = match tokens.next_integer::<i64>() {
        Some(n) if n > 0 => usize::try_from(n)
            .map_err(|_| MatrixError::InputError(format!("dimension {n} is too large")))?,
        _ => {
            return Err(MatrixError::InputError(
                "first value must be a positive integer N".to_string(),
            ))
        }
    };
    let a = tokens.next_matrix(nrows, Choice::A)?;
    let b = tokens.next_matrix(nrows, Choice::B)?;
    log::debug!("loaded two {0}x{0} matrices", nrows);
    MatrixPair::new(a, b)
}

/// Load a [`MatrixPair`] in the text format from a reader.
///
/// See [`loads`] for the format and errors.
/// The input does not have to be valid UTF-8.
/// Read failures give [`MatrixError::IoError`].
pub fn load<R: Read>(reader: R) -> Result<MatrixPair, MatrixError> {
    let mut reader = reader;
    let mut input = vec![];
    reader.read_to_end(&mut input)?;
    loads_bytes(&input)
}

/// Load a [`MatrixPair`] from a `YAML` string.
///
/// ```
/// let yaml = "
/// a: [[1, 2], [3, 4]]
/// b: [[5, 6], [7, 8]]
/// ";
/// let pair = matops::loads_yaml(yaml).unwrap();
/// assert_eq!(pair.a().diagonal_sums(), (5, 5));
/// ```
///
/// Ragged rows, or matrices of different dimension, are errors:
///
/// ```
/// let yaml = "
/// a: [[1, 2], [3]]
/// b: [[5, 6], [7, 8]]
/// ";
/// assert!(matops::loads_yaml(yaml).is_err());
/// ```
pub fn loads_yaml(yaml: &str) -> Result<MatrixPair, MatrixError> {
    let pair: MatrixPair = serde_yaml::from_str(yaml)?;
    log::debug!("loaded two {0}x{0} matrices from YAML", pair.nrows());
    Ok(pair)
}

/// Load a [`MatrixPair`] from a `YAML` reader.
pub fn load_yaml<R: Read>(reader: R) -> Result<MatrixPair, MatrixError> {
    let pair: MatrixPair = serde_yaml::from_reader(reader)?;
    log::debug!("loaded two {0}x{0} matrices from YAML", pair.nrows());
    Ok(pair)
}

/// Load a [`MatrixPair`] from a `JSON` string.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<MatrixPair, MatrixError> {
    let pair: MatrixPair = serde_json::from_str(json)?;
    log::debug!("loaded two {0}x{0} matrices from JSON", pair.nrows());
    Ok(pair)
}

/// Load a [`MatrixPair`] from a `JSON` reader.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn load_json<R: Read>(reader: R) -> Result<MatrixPair, MatrixError> {
    let pair: MatrixPair = serde_json::from_reader(reader)?;
    log::debug!("loaded two {0}x{0} matrices from JSON", pair.nrows());
    Ok(pair)
}

/// Open `path` and load it in the given format.
pub fn load_path_as<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<MatrixPair, MatrixError> {
    let path = path.as_ref();
    log::info!("reading {} as {:?}", path.display(), format);
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    match format {
        InputFormat::Text => load(reader),
        InputFormat::Yaml => load_yaml(reader),
        #[cfg(feature = "json")]
        InputFormat::Json => load_json(reader),
    }
}

/// Open `path` and load it, choosing the format with
/// [`InputFormat::from_path`].
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<MatrixPair, MatrixError> {
    let format = InputFormat::from_path(&path);
    load_path_as(path, format)
}

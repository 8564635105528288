//! The interactive walk through the matrix operations.
//!
//! A [`Session`] prints both matrices, their sum, product and
//! diagonal sums, then asks for one row swap, one column swap
//! and one cell update, printing the chosen matrix after each
//! accepted change.
//!
//! Input is read as whitespace-separated tokens, which may be
//! spread across lines in any way.
//!
//! ```
//! let mut pair = matops::loads("2  1 2 3 4  5 6 7 8").unwrap();
//! let input = "1\n0 1\n0\n0 0\n0\n1 1 9\n";
//! let mut session = matops::Session::new(input.as_bytes(), Vec::new());
//! let summary = session.run(&mut pair).unwrap();
//! assert_eq!(summary.row_swap, matops::Outcome::Applied(matops::Choice::B));
//! assert_eq!(pair.b().to_rows(), vec![vec![7, 8], vec![5, 6]]);
//! assert_eq!(pair.a().get(1, 1), Some(9));
//! ```

use crate::error::MatrixError;
use crate::matrix::SquareMatrix;
use crate::pair::{Choice, MatrixPair};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// What happened during one interactive step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The change was made to the chosen matrix.
    Applied(Choice),
    /// The indices were out of range, so nothing changed.
    Rejected(Choice),
    /// The input could not be read as integers.
    Skipped,
}

/// The [`Outcome`] of each interactive step of [`Session::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub row_swap: Outcome,
    pub column_swap: Outcome,
    pub update: Outcome,
}

struct Step {
    choose: &'static str,
    request: &'static str,
    done: &'static str,
    invalid: &'static str,
    skipped: &'static str,
}

const ROW_SWAP: Step = Step {
    choose: "Row swap (0-based). Choose matrix (0 for A, 1 for B): ",
    request: "Enter two row indices to swap (0-based, separated by a space, e.g., '1 3'): ",
    done: "after row swap",
    invalid: "Invalid row indices. No changes made.",
    skipped: "Invalid input; skipping row swap.",
};

const COLUMN_SWAP: Step = Step {
    choose: "Column swap (0-based). Choose matrix (0 for A, 1 for B): ",
    request: "Enter two column indices to swap (0-based, separated by a space, e.g., '0 2'): ",
    done: "after column swap",
    invalid: "Invalid column indices. No changes made.",
    skipped: "Invalid input; skipping column swap.",
};

const UPDATE: Step = Step {
    choose: "Update one element. Choose matrix (0 for A, 1 for B): ",
    request: "Enter the row, column, and new value (0-based, separated by spaces, e.g., '2 1 99'): ",
    done: "after update",
    invalid: "Invalid indices. No changes made.",
    skipped: "Invalid input; skipping update.",
};

struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    // Returns false at end of input.
    // Bytes that are not UTF-8 become tokens that never parse.
    fn fill(&mut self) -> std::io::Result<bool> {
        while self.pending.is_empty() {
            let mut line = vec![];
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(true)
    }

    fn peek(&mut self) -> std::io::Result<Option<&str>> {
        if self.fill()? {
            Ok(self.pending.front().map(String::as_str))
        } else {
            Ok(None)
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Drives the fixed sequence of operations over a reader and a writer.
pub struct Session<R, W> {
    input: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Tokens::new(input),
            output,
        }
    }

    /// Give back the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for the name of the input file.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InputError`] at end of input.
    pub fn prompt_filename(&mut self) -> Result<String, MatrixError> {
        write!(self.output, "Enter input filename: ")?;
        self.output.flush()?;
        self.input
            .next_token()?
            .ok_or_else(|| MatrixError::InputError("failed to read filename".to_string()))
    }

    /// Run the whole sequence on `pair`.
    ///
    /// Invalid or unreadable input is reported to the writer and
    /// recorded in the returned [`Summary`]; it is never an error.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IoError`] if reading input or writing output fails.
    pub fn run(&mut self, pair: &mut MatrixPair) -> Result<Summary, MatrixError> {
        self.report(pair)?;

        let row_swap = self.mutate(pair, &ROW_SWAP, |m, [r1, r2]: [i32; 2]| m.swap_rows(r1, r2))?;
        let column_swap =
            self.mutate(pair, &COLUMN_SWAP, |m, [c1, c2]: [i32; 2]| m.swap_cols(c1, c2))?;
        let update = self.mutate(pair, &UPDATE, |m, [row, column, value]: [i32; 3]| {
            m.update_cell(row, column, value)
        })?;

        writeln!(self.output, "\nDone. Goodbye!")?;
        self.output.flush()?;

        Ok(Summary {
            row_swap,
            column_swap,
            update,
        })
    }

    fn report(&mut self, pair: &MatrixPair) -> Result<(), MatrixError> {
        write!(self.output, "{}", pair.a().labeled("Matrix A"))?;
        write!(self.output, "{}", pair.b().labeled("Matrix B"))?;

        writeln!(self.output, "\nA + B:")?;
        write!(self.output, "{}", pair.a().add(pair.b()).labeled("Sum"))?;

        writeln!(self.output, "\nA * B:")?;
        write!(self.output, "{}", pair.a().multiply(pair.b()).labeled("Product"))?;

        writeln!(self.output, "\nDiagonal sums:")?;
        for choice in [Choice::A, Choice::B] {
            let (main, secondary) = pair.get(choice).diagonal_sums();
            writeln!(
                self.output,
                "Matrix {choice} -> main: {main}, secondary: {secondary}"
            )?;
        }
        Ok(())
    }

    // A selector that is not an i32 is left unread,
    // so that the index read which follows fails on it.
    fn read_choice(&mut self) -> Result<Choice, MatrixError> {
        let selector = match self.input.peek()? {
            Some(token) => token.parse::<i32>().ok(),
            None => None,
        };
        match selector {
            Some(selector) => {
                self.input.next_token()?;
                Ok(Choice::from_selector(selector))
            }
            None => Ok(Choice::A),
        }
    }

    fn read_integers<const K: usize>(&mut self) -> Result<Option<[i32; K]>, MatrixError> {
        let mut values = [0; K];
        for value in values.iter_mut() {
            match self.input.next_token()?.and_then(|token| token.parse().ok()) {
                Some(parsed) => *value = parsed,
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    fn mutate<const K: usize, F>(
        &mut self,
        pair: &mut MatrixPair,
        step: &Step,
        apply: F,
    ) -> Result<Outcome, MatrixError>
    where
        F: FnOnce(&mut SquareMatrix, [i32; K]) -> bool,
    {
        write!(self.output, "\n{}", step.choose)?;
        self.output.flush()?;
        let choice = self.read_choice()?;

        write!(self.output, "{}", step.request)?;
        self.output.flush()?;
        let outcome = match self.read_integers::<K>()? {
            Some(values) => {
                if apply(pair.get_mut(choice), values) {
                    let label = format!("Matrix {choice} {}", step.done);
                    write!(self.output, "{}", pair.get(choice).labeled(&label))?;
                    Outcome::Applied(choice)
                } else {
                    writeln!(self.output, "{}", step.invalid)?;
                    Outcome::Rejected(choice)
                }
            }
            None => {
                writeln!(self.output, "{}", step.skipped)?;
                self.input.discard_line();
                Outcome::Skipped
            }
        };
        log::debug!("{}: {:?}", step.done, outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_span_lines() {
        let mut tokens = Tokens::new("1\n\n  2 3\n".as_bytes());
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(tokens.peek().unwrap(), Some("2"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_discard_line_keeps_later_lines() {
        let mut tokens = Tokens::new("x y z\n4\n".as_bytes());
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("x"));
        tokens.discard_line();
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn test_non_utf8_line_becomes_tokens() {
        let mut tokens = Tokens::new(&b"\xe9 7\n"[..]);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn test_out_of_range_selector_is_not_consumed() {
        let mut session = Session::new("4294967297 0 1\n".as_bytes(), Vec::new());
        assert_eq!(session.read_choice().unwrap(), Choice::A);
        assert_eq!(session.read_integers::<2>().unwrap(), None);
    }

    #[test]
    fn test_non_integer_selector_is_not_consumed() {
        let mut session = Session::new("abc\n".as_bytes(), Vec::new());
        assert_eq!(session.read_choice().unwrap(), Choice::A);
        assert_eq!(session.read_integers::<1>().unwrap(), None);
    }
}

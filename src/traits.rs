use crate::error::MatrixError;

pub(crate) trait Validate {
    fn validate<F: FnOnce(String) -> MatrixError>(&self, err: F) -> Result<(), MatrixError>;
}

impl Validate for [Vec<i32>] {
    fn validate<F: FnOnce(String) -> MatrixError>(&self, err: F) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(err("a matrix must have at least one row".to_string()));
        }
        match self.iter().position(|row| row.len() != self.len()) {
            Some(index) => {
                let msg = format!(
                    "matrix must be square: row {} has {} values, expected {}",
                    index,
                    self[index].len(),
                    self.len()
                );
                Err(err(msg))
            }
            None => Ok(()),
        }
    }
}

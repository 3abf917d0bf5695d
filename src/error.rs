use thiserror::Error;

/// Failures raised by the classification core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KnnError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Position {pos} out of range for sequence of length {length}")]
    OutOfRange { pos: usize, length: usize },

    #[error("Dimension mismatch: vectors of length {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Degenerate configuration: {0}")]
    DegenerateConfig(String),
}

pub type Result<T> = std::result::Result<T, KnnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KnnError::OutOfRange { pos: 7, length: 4 };
        assert_eq!(err.to_string(), "Position 7 out of range for sequence of length 4");

        let err = KnnError::DimensionMismatch { left: 3, right: 5 };
        assert_eq!(err.to_string(), "Dimension mismatch: vectors of length 3 and 5");

        let err = KnnError::EmptyInput("test set".to_string());
        assert_eq!(err.to_string(), "Empty input: test set");
    }
}

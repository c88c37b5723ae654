//! Error types of the transform engine.
use thiserror::Error;

/// Result type for transform operations
pub type Result<T> = std::result::Result<T, DftError>;

/// Errors raised before a transform starts accumulating.
///
/// A transform either completes for every bin or fails with one of these,
/// output buffers are never partially written.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// Input contains a NaN or infinite component
    #[error("Non-finite input at index {index}")]
    NonFiniteInput {
        /// Position of the first offending sample
        index: usize,
    },

    /// Buffer length differs from the length the handler was built for
    #[error("Size mismatch in dft, got {actual} expected {expected}")]
    LengthMismatch {
        /// Length declared on the handler
        expected: usize,
        /// Length of the buffer that was passed
        actual: usize,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages_name_offending_values() {
        let err = DftError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Size mismatch in dft, got 3 expected 4");
        let err = DftError::NonFiniteInput { index: 7 };
        assert_eq!(err.to_string(), "Non-finite input at index 7");
    }
}

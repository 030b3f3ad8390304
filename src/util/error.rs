use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TupleError {
    #[error("InvalidSize: a fixed tuple must hold at least one element, got {size}")]
    InvalidSize { size: usize },
    #[error("ArityMismatch: expected {expected} element(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("IndexOutOfBounds: index {index} is out of range for a tuple of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Check that `size` is usable as a tuple length.
///
/// `const` so it can back the compile-time size check of [`FixedTuple`](crate::FixedTuple).
pub const fn validate_size(size: usize) -> Result<(), TupleError> {
    if size == 0 {
        Err(TupleError::InvalidSize { size })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_invalid() {
        assert_eq!(Err(TupleError::InvalidSize { size: 0 }), validate_size(0));
        assert_eq!(Ok(()), validate_size(1));
        assert_eq!(Ok(()), validate_size(64));
    }

    #[test]
    fn messages_name_the_error_class() {
        let err = TupleError::ArityMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!("ArityMismatch: expected 3 element(s), got 2", err.to_string());

        let err = TupleError::IndexOutOfBounds { index: 4, len: 4 };
        assert!(err.to_string().starts_with("IndexOutOfBounds"));
    }
}

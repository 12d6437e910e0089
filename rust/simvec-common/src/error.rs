use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(index: usize, size: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, size }.into())
    }

    pub fn allocation_failed(slots: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::AllocationFailed { slots, source }.into())
    }

    pub fn capacity_overflow(requested: &'static str) -> Error {
        Error(ErrorKind::CapacityOverflow { requested }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised by a bounds-checked accessor.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` if this error reports a failed buffer allocation.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self.kind(), ErrorKind::AllocationFailed { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for size {size}")]
    OutOfRange { index: usize, size: usize },

    #[error("failed to allocate a buffer of {slots} slots: {source}")]
    AllocationFailed {
        slots: usize,
        source: TryReserveError,
    },

    #[error("capacity overflow while computing {requested}")]
    CapacityOverflow { requested: &'static str },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let e = Error::out_of_range(3, 3);
        assert!(e.is_out_of_range());
        assert!(!e.is_allocation_failure());
        assert_eq!(e.to_string(), "index 3 is out of range for size 3");
    }

    #[test]
    fn test_allocation_failure_kind() {
        let source = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let e = Error::allocation_failed(usize::MAX, source);
        assert!(e.is_allocation_failure());
        match e.into_kind() {
            ErrorKind::AllocationFailed { slots, .. } => assert_eq!(slots, usize::MAX),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_capacity_overflow_message() {
        let e = Error::capacity_overflow("size + 1");
        assert_eq!(e.to_string(), "capacity overflow while computing size + 1");
    }

    #[test]
    fn test_invalid_arg_message() {
        let e = Error::invalid_arg("position", "position <= size");
        assert_eq!(e.to_string(), "invalid argument position: position <= size");
    }
}

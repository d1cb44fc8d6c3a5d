//! Failure kinds produced by capability dispatch.

use std::fmt;

use super::signature::OperationId;

/// The structured failure returned when capability dispatch cannot run a
/// real handler.
///
/// Both kinds are recoverable by design: callers probe for them and fall
/// back to a generic strategy instead of pre-checking feature presence.
///
/// # Examples
///
/// ```rust
/// use attempt::capability::{CapabilityError, OperationId};
///
/// let error = CapabilityError::NotImplemented {
///     operation: OperationId::new("length"),
///     arguments: "(i32)".to_string(),
/// };
/// assert!(error.is_not_implemented());
/// assert_eq!(
///     error.to_string(),
///     "operation `length` is not implemented for arguments (i32)"
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CapabilityError {
    /// The operation is declared tryable but no handler covers these
    /// argument types; produced by the universal fallback.
    NotImplemented {
        /// The operation that was attempted.
        operation: OperationId,
        /// Human-readable description of the argument types at the call.
        arguments: String,
    },
    /// The operation was never declared through the registry at all.
    UnknownOperation {
        /// The operation that was attempted.
        operation: OperationId,
    },
}

impl CapabilityError {
    /// Returns `true` for the `NotImplemented` kind, the shape callers
    /// probe for.
    #[inline]
    pub const fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Returns the operation the failure refers to.
    #[inline]
    pub const fn operation(&self) -> OperationId {
        match self {
            Self::NotImplemented { operation, .. } | Self::UnknownOperation { operation } => {
                *operation
            }
        }
    }
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented {
                operation,
                arguments,
            } => write!(
                formatter,
                "operation `{operation}` is not implemented for arguments {arguments}"
            ),
            Self::UnknownOperation { operation } => {
                write!(formatter, "operation `{operation}` was never declared")
            }
        }
    }
}

impl std::error::Error for CapabilityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_display() {
        let error = CapabilityError::NotImplemented {
            operation: OperationId::new("length"),
            arguments: "(alloc::vec::Vec<i32>)".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "operation `length` is not implemented for arguments (alloc::vec::Vec<i32>)"
        );
    }

    #[test]
    fn unknown_operation_display() {
        let error = CapabilityError::UnknownOperation {
            operation: OperationId::new("length"),
        };
        assert_eq!(format!("{error}"), "operation `length` was never declared");
    }

    #[test]
    fn operation_accessor_covers_both_kinds() {
        let not_implemented = CapabilityError::NotImplemented {
            operation: OperationId::new("length"),
            arguments: "()".to_string(),
        };
        let unknown = CapabilityError::UnknownOperation {
            operation: OperationId::new("width"),
        };
        assert_eq!(not_implemented.operation().name(), "length");
        assert_eq!(unknown.operation().name(), "width");
    }
}

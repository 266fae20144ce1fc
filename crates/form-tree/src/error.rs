//! Form tree errors

/// Result type for form tree operations
pub type FormResult<T> = Result<T, FormError>;

/// Errors reported by container and identity operations.
///
/// Both are programmer errors: nothing is retried and the tree is left
/// exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl FormError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormError::invalid("Required attribute 'name' can not be removed");
        assert_eq!(
            err.to_string(),
            "Invalid argument: Required attribute 'name' can not be removed"
        );

        let err = FormError::not_found("Element with name 'email' was not found");
        assert!(matches!(err, FormError::NotFound(_)));
        assert!(err.to_string().starts_with("Not found:"));
    }
}

//! Domain error types.
//!
//! These errors represent validation failures of stop field values.
//! They are distinct from storage and upstream errors.

use super::StopField;

/// Domain-level errors for field validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A key outside the updatable field set
    #[error(
        "only 'last_updated', 'name', 'latitude', 'longitude', and 'next_departure' are allowed, got '{0}'"
    )]
    InvalidField(String),

    /// A value that violates the field's constraints
    #[error("{field}: {reason}")]
    InvalidValue {
        field: StopField,
        reason: &'static str,
    },

    /// A timestamp that does not follow `yyyy-mm-dd-hh:mm:ss`
    #[error("{field} must be in yyyy-mm-dd-hh:mm:ss format")]
    InvalidFormat { field: StopField },

    /// A patch with no fields at all
    #[error("request body is required")]
    EmptyPatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidField("platform".into());
        assert!(err.to_string().contains("got 'platform'"));

        let err = DomainError::InvalidValue {
            field: StopField::Name,
            reason: "cannot be blank",
        };
        assert_eq!(err.to_string(), "name: cannot be blank");

        let err = DomainError::InvalidFormat {
            field: StopField::LastUpdated,
        };
        assert_eq!(
            err.to_string(),
            "last_updated must be in yyyy-mm-dd-hh:mm:ss format"
        );

        assert_eq!(DomainError::EmptyPatch.to_string(), "request body is required");
    }
}

//! Handler error types.
//!
//! `ConstraintError` is returned by create handlers, `TransitionError` by
//! handlers that move or mutate an existing record. Both collapse into
//! [`DomainError`] for a uniform outer surface.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, IllegalTransition, UserId, ValidationErrors,
};
use crate::domain::friendship::FriendRequestError;
use crate::ports::StorageError;

/// Failure creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("User {0} cannot reference themselves")]
    SelfReference(UserId),

    #[error("Duplicate key '{key}' on index {index}")]
    DuplicateKey { index: String, key: String },

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl ConstraintError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConstraintError::Validation(_) => ErrorCode::ValidationFailed,
            ConstraintError::SelfReference(_) => ErrorCode::SelfReference,
            ConstraintError::DuplicateKey { .. } => ErrorCode::DuplicateKey,
            ConstraintError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationErrors> for ConstraintError {
    fn from(errors: ValidationErrors) -> Self {
        ConstraintError::Validation(errors)
    }
}

impl From<FriendRequestError> for ConstraintError {
    fn from(err: FriendRequestError) -> Self {
        match err {
            FriendRequestError::Invalid(errors) => ConstraintError::Validation(errors),
            FriendRequestError::SelfReference(user) => ConstraintError::SelfReference(user),
        }
    }
}

impl From<StorageError> for ConstraintError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateKey { index, key } => {
                ConstraintError::DuplicateKey { index, key }
            }
            other => ConstraintError::Storage(other),
        }
    }
}

impl From<ConstraintError> for DomainError {
    fn from(err: ConstraintError) -> Self {
        match err {
            ConstraintError::Validation(errors) => errors.into(),
            ConstraintError::DuplicateKey { index, key } => {
                DomainError::new(ErrorCode::DuplicateKey, format!("Duplicate key on {}", index))
                    .with_detail("index", index)
                    .with_detail("key", key)
            }
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

/// Failure moving or mutating an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition),

    #[error("{collection} not found: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl TransitionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TransitionError::Validation(_) => ErrorCode::ValidationFailed,
            TransitionError::IllegalTransition(_) => ErrorCode::IllegalTransition,
            TransitionError::NotFound { .. } => ErrorCode::NotFound,
            TransitionError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationErrors> for TransitionError {
    fn from(errors: ValidationErrors) -> Self {
        TransitionError::Validation(errors)
    }
}

impl From<StorageError> for TransitionError {
    fn from(err: StorageError) -> Self {
        TransitionError::Storage(err)
    }
}

impl From<TransitionError> for DomainError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Validation(errors) => errors.into(),
            TransitionError::IllegalTransition(illegal) => {
                DomainError::new(ErrorCode::IllegalTransition, illegal.to_string())
                    .with_detail("from", illegal.from)
                    .with_detail("to", illegal.to)
            }
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Violation;

    #[test]
    fn storage_duplicate_surfaces_unchanged() {
        let err: ConstraintError = StorageError::DuplicateKey {
            index: "friend_requests.pair".to_string(),
            key: "a:b".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ConstraintError::DuplicateKey {
                index: "friend_requests.pair".to_string(),
                key: "a:b".to_string(),
            }
        );
        assert_eq!(err.code(), ErrorCode::DuplicateKey);
    }

    #[test]
    fn unavailable_storage_maps_to_storage_error() {
        let err: ConstraintError = StorageError::Unavailable("down".to_string()).into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[test]
    fn self_reference_converts_from_domain() {
        let user = UserId::new();
        let err: ConstraintError = FriendRequestError::SelfReference(user).into();
        assert_eq!(err, ConstraintError::SelfReference(user));
    }

    #[test]
    fn validation_becomes_domain_error_with_paths() {
        let errors = ValidationErrors::single("level", Violation::MissingField);
        let domain: DomainError = ConstraintError::Validation(errors).into();
        assert_eq!(domain.code, ErrorCode::ValidationFailed);
        assert!(domain.details.contains_key("level"));
    }

    #[test]
    fn illegal_transition_becomes_domain_error() {
        let err = TransitionError::from(IllegalTransition {
            from: "COMPLETED".to_string(),
            to: "IN_PROGRESS".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::IllegalTransition);

        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::IllegalTransition);
        assert_eq!(domain.details.get("from").map(String::as_str), Some("COMPLETED"));
    }
}

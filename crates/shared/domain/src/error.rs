//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

use crate::user::UserId;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No user carries the given id
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// A user with the same id is already stored
    #[error("User {0} already exists")]
    DuplicateUser(UserId),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

//! User Service Library
//!
//! This crate provides user management: an in-memory repository that owns
//! the user records and a service layer that turns repository outcomes into
//! application errors. Both sit behind traits so the HTTP layer can be driven
//! with substitutes in tests.

pub mod repository;
pub mod service;

pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;

//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling rendered as HTTP responses
//! - The `{ success, data }` response envelope

pub mod error;
pub mod response;

pub use error::{AppError, AppResult, OptionExt};
pub use response::{ApiResponse, Created};

//! User domain entity and its read projection.

use serde::{Deserialize, Serialize};

use crate::constants::is_of_age;

/// User identifier, unique within a repository
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Naruto"))]
    pub name: String,
    /// User age in years
    #[cfg_attr(feature = "openapi", schema(example = 10))]
    pub age: u32,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Check if user has reached the age of majority
    pub fn is_of_age(&self) -> bool {
        is_of_age(self.age)
    }
}

/// User response returned to clients.
///
/// `is_of_age` is derived from `age` on every conversion and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    pub id: UserId,
    /// User display name
    pub name: String,
    /// User age in years
    pub age: u32,
    /// Whether the user is 18 or older
    pub is_of_age: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let is_of_age = user.is_of_age();
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            is_of_age,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            age: user.age,
            is_of_age: user.is_of_age(),
        }
    }
}

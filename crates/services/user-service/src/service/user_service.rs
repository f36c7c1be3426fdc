//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list().await)
    }

    async fn count_users(&self) -> AppResult<usize> {
        Ok(self.repo.count().await)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_one(id).await.ok_or_not_found()
    }

    async fn create_user(&self, user: User) -> AppResult<User> {
        if !self.repo.save(user.clone()).await {
            tracing::warn!("Failed to create user {}", user.id);
            return Err(AppError::CreationFailed);
        }

        tracing::debug!("Created user {}", user.id);
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.repo.delete(id).await {
            tracing::warn!("Failed to delete user {}", id);
            return Err(AppError::DeletionFailed);
        }

        tracing::debug!("Deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn manager(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_users_passes_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| vec![User::new(1, "Naruto", 10)]);

        let users = manager(repo).list_users().await.unwrap();
        assert_eq!(users, vec![User::new(1, "Naruto", 10)]);
    }

    #[tokio::test]
    async fn test_count_users_does_not_list() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().times(1).returning(|| 3);
        repo.expect_list().never();

        assert_eq!(manager(repo).count_users().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_get_user_missing_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_one().with(eq(1i64)).returning(|_| None);

        let result = manager(repo).get_user(1).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_user_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().times(1).returning(|_| false);

        let result = manager(repo).create_user(User::new(7, "Sasukee", 19)).await;
        assert!(matches!(result, Err(AppError::CreationFailed)));
    }

    #[tokio::test]
    async fn test_create_user_returns_saved_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .with(eq(User::new(7, "Sasukee", 19)))
            .returning(|_| true);

        let user = manager(repo)
            .create_user(User::new(7, "Sasukee", 19))
            .await
            .unwrap();
        assert_eq!(user, User::new(7, "Sasukee", 19));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(1i64)).returning(|_| true);

        assert!(manager(repo).delete_user(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| false);

        let result = manager(repo).delete_user(1).await;
        assert!(matches!(result, Err(AppError::DeletionFailed)));
    }
}

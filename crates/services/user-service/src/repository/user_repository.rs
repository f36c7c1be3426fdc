//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{DomainError, DomainResult, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `save` and `delete` report failure with `false` and leave the stored
/// records untouched in that case.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Number of stored users
    async fn count(&self) -> usize;

    /// Find user by ID
    async fn find_one(&self, id: UserId) -> Option<User>;

    /// Insert a new user, `false` if the id is already taken
    async fn save(&self, user: User) -> bool;

    /// Remove user by ID, `false` if no user has that id
    async fn delete(&self, id: UserId) -> bool;
}

/// Concrete implementation of UserRepository backed by a vector.
///
/// Reads share the lock; `save` and `delete` hold the write lock so the
/// duplicate check and the mutation happen atomically.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given users.
    ///
    /// Later entries that reuse an id are skipped.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut stored = Vec::new();
        for user in users {
            if let Err(e) = insert(&mut stored, user) {
                tracing::warn!("Skipping seed user: {}", e);
            }
        }

        Self {
            users: RwLock::new(stored),
        }
    }
}

fn insert(users: &mut Vec<User>, user: User) -> DomainResult<()> {
    if users.iter().any(|u| u.id == user.id) {
        return Err(DomainError::DuplicateUser(user.id));
    }
    users.push(user);
    Ok(())
}

fn remove(users: &mut Vec<User>, id: UserId) -> DomainResult<User> {
    let index = users
        .iter()
        .position(|u| u.id == id)
        .ok_or(DomainError::UserNotFound(id))?;

    // keep insertion order for `list`
    Ok(users.remove(index))
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    async fn find_one(&self, id: UserId) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    async fn save(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        match insert(&mut users, user) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Save rejected: {}", e);
                false
            }
        }
    }

    async fn delete(&self, id: UserId) -> bool {
        let mut users = self.users.write().await;
        match remove(&mut users, id) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Delete rejected: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ninjas() -> Vec<User> {
        vec![
            User::new(1, "Naruto", 10),
            User::new(2, "Sasuke", 18),
            User::new(3, "Kakashi", 50),
        ]
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = UserStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = UserStore::new();
        for user in ninjas() {
            assert!(store.save(user).await);
        }

        assert_eq!(store.list().await, ninjas());
    }

    #[tokio::test]
    async fn test_saved_user_is_visible() {
        let store = UserStore::new();
        assert!(store.save(User::new(7, "Sasukee", 19)).await);

        assert_eq!(store.find_one(7).await, Some(User::new(7, "Sasukee", 19)));
    }

    #[tokio::test]
    async fn test_save_duplicate_id_leaves_state_unchanged() {
        let store = UserStore::with_users(ninjas());

        assert!(!store.save(User::new(2, "Impostor", 99)).await);
        assert_eq!(store.list().await, ninjas());
    }

    #[tokio::test]
    async fn test_count_tracks_mutations() {
        let store = UserStore::with_users(ninjas());
        assert_eq!(store.count().await, 3);

        assert!(store.delete(1).await);
        assert!(!store.save(User::new(2, "Impostor", 99)).await);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_find_one_missing() {
        let store = UserStore::with_users(ninjas());
        assert_eq!(store.find_one(42).await, None);
    }

    #[tokio::test]
    async fn test_delete_removes_user() {
        let store = UserStore::with_users(ninjas());

        assert!(store.delete(2).await);
        assert_eq!(store.find_one(2).await, None);
        assert_eq!(
            store.list().await,
            vec![User::new(1, "Naruto", 10), User::new(3, "Kakashi", 50)]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = UserStore::with_users(ninjas());

        assert!(!store.delete(42).await);
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_with_users_skips_duplicate_ids() {
        let store = UserStore::with_users(vec![
            User::new(1, "Naruto", 10),
            User::new(1, "Boruto", 12),
        ]);

        assert_eq!(store.list().await, vec![User::new(1, "Naruto", 10)]);
    }

    #[tokio::test]
    async fn test_concurrent_saves_with_same_id() {
        use std::sync::Arc;

        let store = Arc::new(UserStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.save(User::new(1, format!("n{}", i), 20)).await })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.list().await.len(), 1);
    }
}

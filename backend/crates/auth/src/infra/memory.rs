//! In-Memory Credential Store
//!
//! Process-local store for tests and database-less local runs.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Users keyed by normalized email
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    async fn create_user(&self, new_user: NewUser) -> AuthResult<User> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;
        match users.entry(new_user.email.as_str().to_owned()) {
            Entry::Occupied(_) => Err(AuthError::DuplicateEmail),
            Entry::Vacant(slot) => Ok(slot.insert(User::create(new_user)).clone()),
        }
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(email.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use platform::password::{Argon2Hasher, ClearTextPassword, HashCost};

    use super::*;
    use crate::domain::value_object::user_name::UserName;

    fn new_user(email: &str) -> NewUser {
        let hasher = Argon2Hasher::new(HashCost::minimal(), None).unwrap();
        NewUser {
            name: UserName::new("Alice").unwrap(),
            email: Email::new(email).unwrap(),
            password_hash: hasher.hash(&ClearTextPassword::from("pw")).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryCredentialStore::new();
        let created = store.create_user(new_user("a@example.com")).await.unwrap();

        let found = store
            .find_by_email(&Email::new("a@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, created.user_id);
        assert_eq!(found.name.as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_duplicate_rejected_and_not_stored() {
        let store = InMemoryCredentialStore::new();
        store.create_user(new_user("a@example.com")).await.unwrap();

        let err = store.create_user(new_user("A@Example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = InMemoryCredentialStore::new();
        assert!(store.is_empty().await);
        let found = store
            .find_by_email(&Email::new("nobody@example.com").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}

//! Todo domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// Data required to persist a new todo.
///
/// The owner is mandatory here; only rows read back from storage can lack one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub contents: String,
    /// Weather snapshot captured at creation time
    pub weather: String,
    pub owner: UserProfile,
}

/// Todo as read from storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub weather: String,
    /// `None` only when the stored owner reference is broken
    pub owner: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Todo {
    /// Id of the owning user, if the owner reference is intact
    pub fn owner_id(&self) -> Option<Uuid> {
        self.owner.as_ref().map(|owner| owner.id)
    }

    /// Whether `user_id` owns this todo
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_with_owner(owner: Option<UserProfile>) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: "title".to_string(),
            contents: "contents".to_string(),
            weather: "Sunny".to_string(),
            owner,
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    #[test]
    fn test_ownership() {
        let owner_id = Uuid::new_v4();
        let todo = todo_with_owner(Some(UserProfile {
            id: owner_id,
            email: "owner@x.com".to_string(),
        }));

        assert!(todo.is_owned_by(owner_id));
        assert!(!todo.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_missing_owner_owns_nothing() {
        let todo = todo_with_owner(None);

        assert_eq!(todo.owner_id(), None);
        assert!(!todo.is_owned_by(Uuid::new_v4()));
    }
}

//! Comment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// Data required to persist a new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub contents: String,
    pub todo_id: Uuid,
    pub author: UserProfile,
}

/// Comment as read from storage, with its author loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub contents: String,
    pub todo_id: Uuid,
    pub author: UserProfile,
    pub created_at: DateTime<Utc>,
}

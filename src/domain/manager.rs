//! Manager domain entity: "user X may act on todo Y".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// Manager assignment as read from storage, with the assigned user loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manager {
    pub id: Uuid,
    pub todo_id: Uuid,
    pub user: UserProfile,
    pub created_at: DateTime<Utc>,
}

impl Manager {
    /// Whether this assignment references `todo_id`
    pub fn belongs_to(&self, todo_id: Uuid) -> bool {
        self.todo_id == todo_id
    }
}

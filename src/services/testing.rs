//! Shared fixtures for service unit tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{AuthUser, Manager, Todo, User, UserProfile, UserRole};
use crate::infra::{
    CommentRepository, ManagerRepository, MockCommentRepository, MockManagerRepository,
    MockTodoRepository, MockUserRepository, TodoRepository, UnitOfWork, UserRepository,
};

/// Repository mocks to configure before handing them to a service.
///
/// Stores left at their default have no expectations, so any call on them
/// fails the test.
#[derive(Default)]
pub struct MockStores {
    pub users: MockUserRepository,
    pub todos: MockTodoRepository,
    pub managers: MockManagerRepository,
    pub comments: MockCommentRepository,
}

impl MockStores {
    pub fn into_uow(self) -> Arc<TestUnitOfWork> {
        Arc::new(TestUnitOfWork {
            users: Arc::new(self.users),
            todos: Arc::new(self.todos),
            managers: Arc::new(self.managers),
            comments: Arc::new(self.comments),
        })
    }
}

/// UnitOfWork backed by repository mocks
pub struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    todos: Arc<MockTodoRepository>,
    managers: Arc<MockManagerRepository>,
    comments: Arc<MockCommentRepository>,
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn todos(&self) -> Arc<dyn TodoRepository> {
        self.todos.clone()
    }

    fn managers(&self) -> Arc<dyn ManagerRepository> {
        self.managers.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comments.clone()
    }
}

pub fn user(id: Uuid, email: &str, password_hash: &str) -> User {
    User {
        id,
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        role: UserRole::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn profile(id: Uuid, email: &str) -> UserProfile {
    UserProfile {
        id,
        email: email.to_string(),
    }
}

pub fn caller(id: Uuid) -> AuthUser {
    AuthUser::new(id, "a@a.com", UserRole::User)
}

pub fn todo(id: Uuid, owner: Option<UserProfile>) -> Todo {
    Todo {
        id,
        title: "Test Title".to_string(),
        contents: "Test Contents".to_string(),
        weather: "Sunny".to_string(),
        owner,
        created_at: Utc::now(),
        modified_at: Utc::now(),
    }
}

pub fn manager(id: Uuid, todo_id: Uuid, user: UserProfile) -> Manager {
    Manager {
        id,
        todo_id,
        user,
        created_at: Utc::now(),
    }
}

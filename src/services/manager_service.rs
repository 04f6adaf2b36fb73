//! Manager assignment service.
//!
//! Each operation is a fail-fast pipeline: every check runs before any
//! write, and the order of checks decides which error a caller sees.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{AuthUser, Manager, UserProfile};
use crate::errors::{messages, AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// A manager assignment with the managed user's public fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManagerResponse {
    pub id: Uuid,
    pub user: UserProfile,
}

impl From<Manager> for ManagerResponse {
    fn from(manager: Manager) -> Self {
        Self {
            id: manager.id,
            user: manager.user,
        }
    }
}

/// Manager service trait for dependency injection.
#[async_trait]
pub trait ManagerService: Send + Sync {
    /// Assign `manager_user_id` as a manager of the todo
    async fn save_manager(
        &self,
        caller: &AuthUser,
        todo_id: Uuid,
        manager_user_id: Uuid,
    ) -> AppResult<ManagerResponse>;

    /// All managers of a todo
    async fn get_managers(&self, todo_id: Uuid) -> AppResult<Vec<ManagerResponse>>;

    /// Remove a manager; only the todo's owner may do this
    async fn delete_manager(&self, caller_id: Uuid, todo_id: Uuid, manager_id: Uuid)
        -> AppResult<()>;
}

/// Concrete implementation of ManagerService using Unit of Work.
pub struct ManagerAssigner<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ManagerAssigner<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ManagerService for ManagerAssigner<U> {
    async fn save_manager(
        &self,
        caller: &AuthUser,
        todo_id: Uuid,
        manager_user_id: Uuid,
    ) -> AppResult<ManagerResponse> {
        let todo = self
            .uow
            .todos()
            .find_by_id(todo_id)
            .await?
            .ok_or_not_found(messages::TODO_NOT_FOUND)?;

        let owner_id = todo.owner_id().ok_or_else(|| {
            tracing::warn!(todo_id = %todo.id, "Todo has no owner");
            AppError::InvalidState(messages::TODO_OWNER_INVALID.to_string())
        })?;

        let candidate = self
            .uow
            .users()
            .find_by_id(manager_user_id)
            .await?
            .ok_or_not_found(messages::MANAGER_USER_NOT_FOUND)?;

        if candidate.id == owner_id {
            return Err(AppError::SelfAssignment);
        }

        let manager = self
            .uow
            .managers()
            .create(todo.id, candidate.profile())
            .await?;

        tracing::info!(
            manager_id = %manager.id,
            todo_id = %todo.id,
            requested_by = %caller.id,
            "Manager assigned"
        );

        Ok(ManagerResponse::from(manager))
    }

    async fn get_managers(&self, todo_id: Uuid) -> AppResult<Vec<ManagerResponse>> {
        let todo = self
            .uow
            .todos()
            .find_by_id(todo_id)
            .await?
            .ok_or_not_found(messages::TODO_NOT_FOUND)?;

        let managers = self.uow.managers().find_by_todo_id_with_user(todo.id).await?;
        Ok(managers.into_iter().map(ManagerResponse::from).collect())
    }

    async fn delete_manager(
        &self,
        caller_id: Uuid,
        todo_id: Uuid,
        manager_id: Uuid,
    ) -> AppResult<()> {
        let caller = self
            .uow
            .users()
            .find_by_id(caller_id)
            .await?
            .ok_or_not_found(messages::USER_NOT_FOUND)?;

        let todo = self
            .uow
            .todos()
            .find_by_id(todo_id)
            .await?
            .ok_or_not_found(messages::TODO_NOT_FOUND)?;

        if todo.owner.is_none() {
            tracing::warn!(todo_id = %todo.id, "Todo has no owner");
        }

        // A missing owner and a foreign owner are the same failure here
        if !todo.is_owned_by(caller.id) {
            return Err(AppError::forbidden(messages::NOT_TODO_OWNER));
        }

        let manager = self
            .uow
            .managers()
            .find_by_id(manager_id)
            .await?
            .ok_or_not_found(messages::MANAGER_NOT_FOUND)?;

        if !manager.belongs_to(todo.id) {
            return Err(AppError::Inconsistent(
                messages::MANAGER_TODO_MISMATCH.to_string(),
            ));
        }

        self.uow.managers().delete(manager.id).await?;

        tracing::info!(manager_id = %manager.id, todo_id = %todo.id, "Manager removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{caller, manager, profile, todo, user, MockStores, TestUnitOfWork};
    use mockall::predicate::eq;

    fn service(stores: MockStores) -> ManagerAssigner<TestUnitOfWork> {
        ManagerAssigner::new(stores.into_uow())
    }

    mod save_manager {
        use super::*;

        #[tokio::test]
        async fn todo_missing() {
            let mut stores = MockStores::default();
            stores.todos.expect_find_by_id().returning(|_| Ok(None));
            stores.users.expect_find_by_id().never();
            stores.managers.expect_create().never();

            let err = service(stores)
                .save_manager(&caller(Uuid::new_v4()), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::NotFound(ref m) if m == "Todo not found"));
        }

        #[tokio::test]
        async fn todo_owner_missing() {
            let mut stores = MockStores::default();
            stores
                .todos
                .expect_find_by_id()
                .returning(|id| Ok(Some(todo(id, None))));
            stores.users.expect_find_by_id().never();
            stores.managers.expect_create().never();

            let err = service(stores)
                .save_manager(&caller(Uuid::new_v4()), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::InvalidState(_)));
            assert_eq!(
                err.to_string(),
                "담당자를 등록하려고 하는 유저가 일정을 만든 유저가 유효하지 않습니다."
            );
        }

        #[tokio::test]
        async fn candidate_user_missing() {
            let owner_id = Uuid::new_v4();
            let mut stores = MockStores::default();
            stores
                .todos
                .expect_find_by_id()
                .returning(move |id| Ok(Some(todo(id, Some(profile(owner_id, "a@a.com"))))));
            stores.users.expect_find_by_id().returning(|_| Ok(None));
            stores.managers.expect_create().never();

            let err = service(stores)
                .save_manager(&caller(owner_id), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(
                err,
                AppError::NotFound(ref m) if m == "등록하려고 하는 담당자 유저가 존재하지 않습니다."
            ));
        }

        #[tokio::test]
        async fn self_assignment_never_persists() {
            let owner_id = Uuid::new_v4();
            let mut stores = MockStores::default();
            stores
                .todos
                .expect_find_by_id()
                .returning(move |id| Ok(Some(todo(id, Some(profile(owner_id, "a@a.com"))))));
            stores
                .users
                .expect_find_by_id()
                .with(eq(owner_id))
                .returning(|id| Ok(Some(user(id, "a@a.com", "hash"))));
            stores.managers.expect_create().never();

            let err = service(stores)
                .save_manager(&caller(owner_id), Uuid::new_v4(), owner_id)
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::SelfAssignment));
            assert_eq!(err.to_string(), "일정 작성자는 본인을 담당자로 등록할 수 없습니다.");
        }

        #[tokio::test]
        async fn success() {
            let owner_id = Uuid::new_v4();
            let todo_id = Uuid::new_v4();
            let manager_user_id = Uuid::new_v4();

            let mut stores = MockStores::default();
            stores
                .todos
                .expect_find_by_id()
                .with(eq(todo_id))
                .returning(move |id| Ok(Some(todo(id, Some(profile(owner_id, "a@a.com"))))));
            stores
                .users
                .expect_find_by_id()
                .with(eq(manager_user_id))
                .returning(|id| Ok(Some(user(id, "b@b.com", "hash"))));
            stores
                .managers
                .expect_create()
                .withf(move |tid, candidate| *tid == todo_id && candidate.id == manager_user_id)
                .times(1)
                .returning(|tid, candidate| Ok(manager(Uuid::new_v4(), tid, candidate)));

            let response = service(stores)
                .save_manager(&caller(owner_id), todo_id, manager_user_id)
                .await
                .unwrap();

            assert_eq!(response.user.id, manager_user_id);
            assert_eq!(response.user.email, "b@b.com");
        }
    }

    mod get_managers {
        use super::*;

        #[tokio::test]
        async fn todo_missing() {
            let mut stores = MockStores::default();
            stores.todos.expect_find_by_id().returning(|_| Ok(None));
            stores.managers.expect_find_by_todo_id_with_user().never();

            let err = service(stores).get_managers(Uuid::new_v4()).await.unwrap_err();

            assert!(matches!(err, AppError::NotFound(ref m) if m == "Todo not found"));
        }

        #[tokio::test]
        async fn lists_managers_of_todo() {
            let todo_id = Uuid::new_v4();
            let managed = profile(Uuid::new_v4(), "b@b.com");
            let expected = managed.clone();

            let mut stores = MockStores::default();
            stores
                .todos
                .expect_find_by_id()
                .returning(|id| Ok(Some(todo(id, Some(profile(Uuid::new_v4(), "a@a.com"))))));
            stores
                .managers
                .expect_find_by_todo_id_with_user()
                .with(eq(todo_id))
                .returning(move |tid| Ok(vec![manager(Uuid::new_v4(), tid, managed.clone())]));

            let managers = service(stores).get_managers(todo_id).await.unwrap();

            assert_eq!(managers.len(), 1);
            assert_eq!(managers[0].user, expected);
        }
    }

    mod delete_manager {
        use super::*;

        fn owned_todo_store(stores: &mut MockStores, owner: Option<Uuid>) {
            stores.todos.expect_find_by_id().returning(move |id| {
                Ok(Some(todo(id, owner.map(|owner| profile(owner, "a@a.com")))))
            });
        }

        fn caller_store(stores: &mut MockStores) {
            stores
                .users
                .expect_find_by_id()
                .returning(|id| Ok(Some(user(id, "a@a.com", "hash"))));
        }

        #[tokio::test]
        async fn caller_missing() {
            let mut stores = MockStores::default();
            stores.users.expect_find_by_id().returning(|_| Ok(None));
            stores.todos.expect_find_by_id().never();
            stores.managers.expect_delete().never();

            let err = service(stores)
                .delete_manager(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::NotFound(ref m) if m == "User not found"));
        }

        #[tokio::test]
        async fn todo_missing() {
            let mut stores = MockStores::default();
            caller_store(&mut stores);
            stores.todos.expect_find_by_id().returning(|_| Ok(None));
            stores.managers.expect_delete().never();

            let err = service(stores)
                .delete_manager(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::NotFound(ref m) if m == "Todo not found"));
        }

        #[tokio::test]
        async fn todo_owner_missing() {
            let mut stores = MockStores::default();
            caller_store(&mut stores);
            owned_todo_store(&mut stores, None);
            stores.managers.expect_find_by_id().never();
            stores.managers.expect_delete().never();

            let err = service(stores)
                .delete_manager(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::Forbidden(ref m) if m == "해당 일정을 만든 유저가 유효하지 않습니다."));
        }

        #[tokio::test]
        async fn caller_not_owner() {
            let mut stores = MockStores::default();
            caller_store(&mut stores);
            owned_todo_store(&mut stores, Some(Uuid::new_v4()));
            stores.managers.expect_find_by_id().never();
            stores.managers.expect_delete().never();

            let err = service(stores)
                .delete_manager(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::Forbidden(_)));
        }

        #[tokio::test]
        async fn manager_missing() {
            let caller_id = Uuid::new_v4();
            let mut stores = MockStores::default();
            caller_store(&mut stores);
            owned_todo_store(&mut stores, Some(caller_id));
            stores.managers.expect_find_by_id().returning(|_| Ok(None));
            stores.managers.expect_delete().never();

            let err = service(stores)
                .delete_manager(caller_id, Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::NotFound(ref m) if m == "Manager not found"));
        }

        #[tokio::test]
        async fn manager_of_other_todo_never_deleted() {
            let caller_id = Uuid::new_v4();
            let mut stores = MockStores::default();
            caller_store(&mut stores);
            owned_todo_store(&mut stores, Some(caller_id));
            stores.managers.expect_find_by_id().returning(|id| {
                Ok(Some(manager(id, Uuid::new_v4(), profile(Uuid::new_v4(), "b@b.com"))))
            });
            stores.managers.expect_delete().never();

            let err = service(stores)
                .delete_manager(caller_id, Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::Inconsistent(_)));
            assert_eq!(err.to_string(), "해당 일정에 등록된 담당자가 아닙니다.");
        }

        #[tokio::test]
        async fn success() {
            let caller_id = Uuid::new_v4();
            let todo_id = Uuid::new_v4();
            let manager_id = Uuid::new_v4();

            let mut stores = MockStores::default();
            caller_store(&mut stores);
            owned_todo_store(&mut stores, Some(caller_id));
            stores.managers.expect_find_by_id().returning(move |id| {
                Ok(Some(manager(id, todo_id, profile(Uuid::new_v4(), "b@b.com"))))
            });
            stores
                .managers
                .expect_delete()
                .with(eq(manager_id))
                .times(1)
                .returning(|_| Ok(()));

            let result = service(stores)
                .delete_manager(caller_id, todo_id, manager_id)
                .await;

            assert!(result.is_ok());
        }
    }
}

//! Migration: Create managers table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000002_create_todos_table::Todos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Managers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Managers::UserId).uuid().not_null())
                    .col(ColumnDef::new(Managers::TodoId).uuid().not_null())
                    .col(
                        ColumnDef::new(Managers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_managers_user_id")
                            .from(Managers::Table, Managers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_managers_todo_id")
                            .from(Managers::Table, Managers::TodoId)
                            .to(Todos::Table, Todos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_managers_todo_id")
                    .table(Managers::Table)
                    .col(Managers::TodoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Managers {
    Table,
    Id,
    UserId,
    TodoId,
    CreatedAt,
}

//! Create `billboard` table with FK to `store`.
//!
//! Billboards go away with their store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Billboard::Table)
                    .if_not_exists()
                    .col(uuid(Billboard::Id).primary_key())
                    .col(string_len(Billboard::Label, 255).not_null())
                    .col(string_len(Billboard::ImageUrl, 2048).not_null())
                    .col(uuid(Billboard::StoreId).not_null())
                    .col(timestamp_with_time_zone(Billboard::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Billboard::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billboard_store")
                            .from(Billboard::Table, Billboard::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Billboard::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Billboard { Table, Id, Label, ImageUrl, StoreId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Store { Table, Id }

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Store: every owner-scoped lookup filters on user_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_store_user")
                    .table(Store::Table)
                    .col(Store::UserId)
                    .to_owned(),
            )
            .await?;

        // Billboard: listing and scoped lookups filter on store_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_billboard_store")
                    .table(Billboard::Table)
                    .col(Billboard::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_billboard_store").table(Billboard::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_store_user").table(Store::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Store { Table, UserId }

#[derive(DeriveIden)]
enum Billboard { Table, StoreId }

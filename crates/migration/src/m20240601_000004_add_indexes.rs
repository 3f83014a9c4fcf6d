use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: unique name, the catalog seed relies on it for ON CONFLICT
        manager
            .create_index(
                Index::create()
                    .name("uniq_service_name")
                    .table(Service::Table)
                    .col(Service::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // User: (id, token) lookup on every authenticated call
        manager
            .create_index(
                Index::create()
                    .name("idx_user_token")
                    .table(User::Table)
                    .col(User::Token)
                    .to_owned(),
            )
            .await?;

        // ServiceRequest: index on user_id and service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_service_request_user")
                    .table(ServiceRequest::Table)
                    .col(ServiceRequest::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_request_service")
                    .table(ServiceRequest::Table)
                    .col(ServiceRequest::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_service_name").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_token").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_request_user").table(ServiceRequest::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_request_service").table(ServiceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, Name }

#[derive(DeriveIden)]
enum User { Table, Token }

#[derive(DeriveIden)]
enum ServiceRequest { Table, UserId, ServiceId }

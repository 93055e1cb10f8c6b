use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261001_000001_profile::Profile;

static IDX_SUPPORT_REQUEST_PROFILE_ID: &str = "idx-support_request-profile_id";
static FK_SUPPORT_REQUEST_PROFILE_ID: &str = "fk-support_request-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportRequest::Id))
                    .col(integer(SupportRequest::ProfileId))
                    .col(string(SupportRequest::Subject))
                    .col(text(SupportRequest::Message))
                    .col(boolean(SupportRequest::Resolved).default(false))
                    .col(timestamp(SupportRequest::CreatedAt))
                    .col(timestamp_null(SupportRequest::ResolvedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUPPORT_REQUEST_PROFILE_ID)
                    .table(SupportRequest::Table)
                    .col(SupportRequest::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUPPORT_REQUEST_PROFILE_ID)
                    .from_tbl(SupportRequest::Table)
                    .from_col(SupportRequest::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUPPORT_REQUEST_PROFILE_ID)
                    .table(SupportRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUPPORT_REQUEST_PROFILE_ID)
                    .table(SupportRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SupportRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SupportRequest {
    Table,
    Id,
    ProfileId,
    Subject,
    Message,
    Resolved,
    CreatedAt,
    ResolvedAt,
}

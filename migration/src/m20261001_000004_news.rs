use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261001_000001_profile::Profile;

static IDX_NEWS_PUBLISHED_AT: &str = "idx-news-published_at";
static FK_NEWS_CREATED_BY: &str = "fk-news-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string(News::Title))
                    .col(text(News::Content))
                    .col(string_null(News::ImageUrl))
                    .col(timestamp(News::PublishedAt))
                    .col(integer_null(News::CreatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NEWS_PUBLISHED_AT)
                    .table(News::Table)
                    .col(News::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NEWS_CREATED_BY)
                    .from_tbl(News::Table)
                    .from_col(News::CreatedBy)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NEWS_CREATED_BY)
                    .table(News::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NEWS_PUBLISHED_AT)
                    .table(News::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    Content,
    ImageUrl,
    PublishedAt,
    CreatedBy,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261001_000001_profile::Profile;

static IDX_EVENT_DATE: &str = "idx-event-date";
static FK_EVENT_CREATED_BY: &str = "fk-event-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(timestamp(Event::Date))
                    .col(string_null(Event::ImageUrl))
                    .col(integer_null(Event::ParticipantsLimit))
                    .col(integer(Event::CurrentParticipants).default(0))
                    .col(integer_null(Event::CreatedBy))
                    .col(timestamp(Event::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_DATE)
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_CREATED_BY)
                    .from_tbl(Event::Table)
                    .from_col(Event::CreatedBy)
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
                    .name(FK_EVENT_CREATED_BY)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_EVENT_DATE).table(Event::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Date,
    ImageUrl,
    ParticipantsLimit,
    CurrentParticipants,
    CreatedBy,
    CreatedAt,
}

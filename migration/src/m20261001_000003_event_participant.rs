use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261001_000001_profile::Profile, m20261001_000002_event::Event};

static IDX_EVENT_PARTICIPANT_USER_ID: &str = "idx-event_participant-user_id";
static FK_EVENT_PARTICIPANT_EVENT_ID: &str = "fk-event_participant-event_id";
static FK_EVENT_PARTICIPANT_USER_ID: &str = "fk-event_participant-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite key enforces a single registration per (event, user)
        manager
            .create_table(
                Table::create()
                    .table(EventParticipant::Table)
                    .if_not_exists()
                    .col(integer(EventParticipant::EventId))
                    .col(integer(EventParticipant::UserId))
                    .col(timestamp(EventParticipant::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(EventParticipant::EventId)
                            .col(EventParticipant::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_PARTICIPANT_USER_ID)
                    .table(EventParticipant::Table)
                    .col(EventParticipant::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_PARTICIPANT_EVENT_ID)
                    .from_tbl(EventParticipant::Table)
                    .from_col(EventParticipant::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_PARTICIPANT_USER_ID)
                    .from_tbl(EventParticipant::Table)
                    .from_col(EventParticipant::UserId)
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
                    .name(FK_EVENT_PARTICIPANT_USER_ID)
                    .table(EventParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_PARTICIPANT_EVENT_ID)
                    .table(EventParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_PARTICIPANT_USER_ID)
                    .table(EventParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventParticipant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventParticipant {
    Table,
    EventId,
    UserId,
    CreatedAt,
}

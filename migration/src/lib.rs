pub use sea_orm_migration::prelude::*;

mod m20261001_000001_profile;
mod m20261001_000002_event;
mod m20261001_000003_event_participant;
mod m20261001_000004_news;
mod m20261001_000005_document;
mod m20261001_000006_support_request;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_profile::Migration),
            Box::new(m20261001_000002_event::Migration),
            Box::new(m20261001_000003_event_participant::Migration),
            Box::new(m20261001_000004_news::Migration),
            Box::new(m20261001_000005_document::Migration),
            Box::new(m20261001_000006_support_request::Migration),
        ]
    }
}

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::document::CreateDocumentDto;

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    /// Creates a new instance of [`DocumentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        document: CreateDocumentDto,
    ) -> Result<entity::document::Model, DbErr> {
        let document = entity::document::ActiveModel {
            title: ActiveValue::Set(document.title),
            description: ActiveValue::Set(document.description),
            url: ActiveValue::Set(document.url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        document.insert(self.db).await
    }

    /// Every document ordered by title
    pub async fn get_all(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .order_by_asc(entity::document::Column::Title)
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::news::CreateNewsDto;

pub struct NewsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsRepository<'a, C> {
    /// Creates a new instance of [`NewsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Publishes a news article now
    pub async fn create(
        &self,
        news: CreateNewsDto,
        created_by: Option<i32>,
    ) -> Result<entity::news::Model, DbErr> {
        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(news.title),
            content: ActiveValue::Set(news.content),
            image_url: ActiveValue::Set(news.image_url),
            published_at: ActiveValue::Set(Utc::now().naive_utc()),
            created_by: ActiveValue::Set(created_by),
            ..Default::default()
        };

        news.insert(self.db).await
    }

    pub async fn get(&self, news_id: i32) -> Result<Option<entity::news::Model>, DbErr> {
        entity::prelude::News::find_by_id(news_id).one(self.db).await
    }

    /// Every article, most recently published first
    pub async fn get_all(&self) -> Result<Vec<entity::news::Model>, DbErr> {
        entity::prelude::News::find()
            .order_by_desc(entity::news::Column::PublishedAt)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use portal_test_utils::prelude::*;

    use crate::{model::news::CreateNewsDto, server::data::news::NewsRepository};

    /// Expect the latest article first
    #[tokio::test]
    async fn lists_latest_news_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_portal_tables().build().await?;
        let news_repo = NewsRepository::new(&test.db);

        let first = news_repo
            .create(
                CreateNewsDto {
                    title: "Первая".to_string(),
                    content: "Текст".to_string(),
                    image_url: None,
                },
                None,
            )
            .await?;
        let second = news_repo
            .create(
                CreateNewsDto {
                    title: "Вторая".to_string(),
                    content: "Текст".to_string(),
                    image_url: None,
                },
                None,
            )
            .await?;

        let news = news_repo.get_all().await?;

        assert_eq!(news.len(), 2);
        assert_eq!(news[0].id, second.id);
        assert_eq!(news[1].id, first.id);

        Ok(())
    }

    /// Expect Ok(None) for unknown IDs
    #[tokio::test]
    async fn returns_none_for_nonexistent_news() -> Result<(), TestError> {
        let test = TestBuilder::new().with_portal_tables().build().await?;

        let result = NewsRepository::new(&test.db).get(1).await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }
}

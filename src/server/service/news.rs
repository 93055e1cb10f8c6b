use sea_orm::DatabaseConnection;

use crate::{
    model::news::{CreateNewsDto, NewsDto},
    server::{
        data::news::NewsRepository,
        error::{content::ContentError, Error},
    },
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<NewsDto>, Error> {
        let news = NewsRepository::new(self.db).get_all().await?;

        Ok(news.into_iter().map(NewsDto::from).collect())
    }

    pub async fn get(&self, news_id: i32) -> Result<Option<NewsDto>, Error> {
        let news = NewsRepository::new(self.db).get(news_id).await?;

        Ok(news.map(NewsDto::from))
    }

    pub async fn create(&self, mut news: CreateNewsDto, created_by: i32) -> Result<NewsDto, Error> {
        news.title = news.title.trim().to_string();
        if news.title.is_empty() {
            return Err(ContentError::InvalidInput("Укажите заголовок новости").into());
        }
        if news.content.trim().is_empty() {
            return Err(ContentError::InvalidInput("Добавьте текст новости").into());
        }

        let news = NewsRepository::new(self.db)
            .create(news, Some(created_by))
            .await?;

        Ok(news.into())
    }
}

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn content(&self) -> ContentFixtures<'_> {
        ContentFixtures { setup: self }
    }
}

pub struct ContentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ContentFixtures<'a> {
    pub async fn insert_news(&self, title: &str) -> Result<entity::news::Model, TestError> {
        Ok(entity::prelude::News::insert(entity::news::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(format!("Content of {}", title)),
            image_url: ActiveValue::Set(None),
            published_at: ActiveValue::Set(Utc::now().naive_utc()),
            created_by: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_document(
        &self,
        title: &str,
        url: &str,
    ) -> Result<entity::document::Model, TestError> {
        Ok(
            entity::prelude::Document::insert(entity::document::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(None),
                url: ActiveValue::Set(url.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_support_request(
        &self,
        profile_id: i32,
        subject: &str,
    ) -> Result<entity::support_request::Model, TestError> {
        Ok(entity::prelude::SupportRequest::insert(
            entity::support_request::ActiveModel {
                profile_id: ActiveValue::Set(profile_id),
                subject: ActiveValue::Set(subject.to_string()),
                message: ActiveValue::Set(format!("Message about {}", subject)),
                resolved: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                resolved_at: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

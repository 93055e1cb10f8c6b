use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn profile(&self) -> ProfileFixtures<'_> {
        ProfileFixtures { setup: self }
    }
}

pub struct ProfileFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ProfileFixtures<'a> {
    /// Inserts a profile with email `{subject}@example.org` and the subject as full name.
    pub async fn insert_profile(
        &self,
        subject: &str,
        role: &str,
    ) -> Result<entity::profile::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                subject: ActiveValue::Set(subject.to_string()),
                email: ActiveValue::Set(Some(format!("{}@example.org", subject))),
                full_name: ActiveValue::Set(Some(subject.to_string())),
                role: ActiveValue::Set(role.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_member(&self, subject: &str) -> Result<entity::profile::Model, TestError> {
        self.insert_profile(subject, "member").await
    }

    pub async fn insert_employee(
        &self,
        subject: &str,
    ) -> Result<entity::profile::Model, TestError> {
        self.insert_profile(subject, "employee").await
    }
}

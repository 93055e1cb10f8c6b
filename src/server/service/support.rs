use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::support::{CreateSupportRequestDto, SupportRequestDto},
    server::{
        data::{profile::ProfileRepository, support_request::SupportRequestRepository},
        error::{content::ContentError, Error},
    },
};

/// Service for support requests sent by members and handled by employees.
pub struct SupportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<SupportRequestDto>, Error> {
        let requests = SupportRequestRepository::new(self.db)
            .get_all_with_authors()
            .await?;

        Ok(requests.into_iter().map(SupportRequestDto::from).collect())
    }

    pub async fn create(
        &self,
        profile_id: i32,
        request: CreateSupportRequestDto,
    ) -> Result<SupportRequestDto, Error> {
        if let Some(message) = request.validation_error() {
            return Err(ContentError::InvalidInput(message).into());
        }

        let author = ProfileRepository::new(self.db).get(profile_id).await?;
        let created = SupportRequestRepository::new(self.db)
            .create(
                profile_id,
                request.subject.trim().to_string(),
                request.message.trim().to_string(),
            )
            .await?;

        tracing::info!(request_id = %created.id, profile_id = %profile_id, "Received support request");

        Ok((created, author).into())
    }

    pub async fn resolve(&self, request_id: i32) -> Result<SupportRequestDto, Error> {
        let Some(request) = SupportRequestRepository::new(self.db)
            .resolve(request_id)
            .await?
        else {
            return Err(ContentError::SupportRequestNotFound(request_id).into());
        };

        let author = ProfileRepository::new(self.db)
            .get(request.profile_id)
            .await?;

        Ok((request, author).into())
    }
}

use sea_orm::DatabaseConnection;

use crate::{
    model::document::{CreateDocumentDto, DocumentDto},
    server::{
        data::document::DocumentRepository,
        error::{content::ContentError, Error},
    },
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<DocumentDto>, Error> {
        let documents = DocumentRepository::new(self.db).get_all().await?;

        Ok(documents.into_iter().map(DocumentDto::from).collect())
    }

    pub async fn create(&self, mut document: CreateDocumentDto) -> Result<DocumentDto, Error> {
        document.title = document.title.trim().to_string();
        document.url = document.url.trim().to_string();
        if document.title.is_empty() {
            return Err(ContentError::InvalidInput("Укажите название документа").into());
        }
        if document.url.is_empty() {
            return Err(ContentError::InvalidInput("Укажите ссылку на документ").into());
        }

        let document = DocumentRepository::new(self.db).create(document).await?;

        Ok(document.into())
    }
}

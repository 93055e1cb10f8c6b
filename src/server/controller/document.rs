use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        document::{CreateDocumentDto, DocumentDto},
    },
    server::{
        controller::util::get_profile::get_employee_from_session, error::Error,
        model::app::AppState, service::document::DocumentService,
    },
};

pub static DOCUMENT_TAG: &str = "document";

/// All documents ordered by title
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Documents", body = Vec<DocumentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let documents = DocumentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(documents)))
}

/// Add a document link, employees only
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Added document", body = DocumentDto),
        (status = 400, description = "Missing title or URL", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    session: Session,
    Json(document): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    get_employee_from_session(&state, &session).await?;

    let document = DocumentService::new(&state.db).create(document).await?;

    Ok((StatusCode::CREATED, Json(document)))
}

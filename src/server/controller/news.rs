use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        news::{CreateNewsDto, NewsDto},
    },
    server::{
        controller::util::get_profile::get_employee_from_session,
        error::{content::ContentError, Error},
        model::app::AppState,
        service::news::NewsService,
    },
};

pub static NEWS_TAG: &str = "news";

/// All news, most recent first
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "News ordered by publish date", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_list(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let news = NewsService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(news)))
}

/// Publish a news article, employees only
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "Published article", body = NewsDto),
        (status = 400, description = "Missing title or content", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(news): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, Error> {
    let employee = get_employee_from_session(&state, &session).await?;

    let news = NewsService::new(&state.db).create(news, employee.id).await?;

    Ok((StatusCode::CREATED, Json(news)))
}

/// Single news article
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 200, description = "News article", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(news) = NewsService::new(&state.db).get(news_id).await? else {
        return Err(ContentError::NewsNotFound(news_id).into());
    };

    Ok((StatusCode::OK, Json(news)))
}

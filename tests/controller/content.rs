//! Tests for news and document endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::prelude::{Document, News};
use portal::{
    model::{document::CreateDocumentDto, news::CreateNewsDto},
    server::{
        controller::{
            document::create_document,
            news::{create_news, get_news},
        },
        model::session::user::SessionUserId,
    },
};
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 for an existing article and 404 otherwise
#[tokio::test]
async fn returns_news_article_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let news = test.content().insert_news("Opening").await?;
    let state = test.into_app_state();

    let found = into_response(get_news(State(state.clone()), Path(news.id)).await);
    let missing = into_response(get_news(State(state), Path(news.id + 1)).await);

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect employees to publish news
#[tokio::test]
async fn employees_publish_news() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_news(
            State(test.into_app_state()),
            test.session.clone(),
            Json(CreateNewsDto {
                title: "Opening".to_string(),
                content: "The portal is open".to_string(),
                image_url: None,
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(News::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect 400 bad request for a document without a URL
#[tokio::test]
async fn rejects_document_without_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_document(
            State(test.into_app_state()),
            test.session.clone(),
            Json(CreateDocumentDto {
                title: "Charter".to_string(),
                description: None,
                url: " ".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(Document::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect 403 forbidden when members add documents
#[tokio::test]
async fn members_cannot_add_documents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_document(
            State(test.into_app_state()),
            test.session.clone(),
            Json(CreateDocumentDto {
                title: "Charter".to_string(),
                description: None,
                url: "https://example.org/charter.pdf".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

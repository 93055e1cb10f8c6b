//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification. Swagger UI
//! is served at `/api/docs` and the OpenAPI document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with all endpoints and Swagger UI.
///
/// Handlers sharing a path are registered in a single `routes!` call.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, identity };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Portal", description = "Community portal API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::event::EVENT_TAG, description = "Events and participant registration"),
        (name = controller::profile::PROFILE_TAG, description = "Profiles and roles"),
        (name = controller::news::NEWS_TAG, description = "News articles"),
        (name = controller::document::DOCUMENT_TAG, description = "Document links"),
        (name = controller::support::SUPPORT_TAG, description = "Support requests"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(
            controller::event::get_events,
            controller::event::create_event
        ))
        .routes(routes!(controller::event::get_event))
        .routes(routes!(
            controller::event::get_event_participants,
            controller::event::join_event
        ))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::update_profile
        ))
        .routes(routes!(controller::profile::get_profiles))
        .routes(routes!(
            controller::profile::get_profile_role,
            controller::profile::update_profile_role
        ))
        .routes(routes!(
            controller::news::get_news_list,
            controller::news::create_news
        ))
        .routes(routes!(controller::news::get_news))
        .routes(routes!(
            controller::document::get_documents,
            controller::document::create_document
        ))
        .routes(routes!(
            controller::support::get_support_requests,
            controller::support::create_support_request
        ))
        .routes(routes!(controller::support::resolve_support_request))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

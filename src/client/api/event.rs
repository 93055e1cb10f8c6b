use portal::{
    model::{
        api::ApiError,
        event::{EventArticleDto, EventDto, ParticipantProfileDto},
    },
    query::{Collection, QueryClient, QueryKey},
};

use super::{get, get_optional, post};

/// Events ordered by date.
pub async fn list(queries: &QueryClient) -> Result<Vec<EventDto>, ApiError> {
    queries
        .fetch(QueryKey::list(Collection::Events), || get("/api/events"))
        .await
}

/// Event with its participants in a single read, `None` when the event does not exist.
pub async fn article(
    queries: &QueryClient,
    event_id: i32,
) -> Result<Option<EventArticleDto>, ApiError> {
    queries
        .fetch(QueryKey::resource(Collection::Events, event_id), move || async move {
            get_optional(&format!("/api/events/{}", event_id)).await
        })
        .await
}

/// Registered participants with their profiles, employees only.
pub async fn participants(
    queries: &QueryClient,
    event_id: i32,
) -> Result<Vec<ParticipantProfileDto>, ApiError> {
    queries
        .fetch(
            QueryKey::resource(Collection::EventParticipants, event_id),
            move || async move { get(&format!("/api/events/{}/participants", event_id)).await },
        )
        .await
}

/// Registers the viewer for the event and drops every cached event entry.
pub async fn join(queries: &QueryClient, event_id: i32) -> Result<EventDto, ApiError> {
    let event = post(&format!("/api/events/{}/participants", event_id), &()).await?;

    queries.invalidate_collection(Collection::Events);
    queries.invalidate_collection(Collection::EventParticipants);

    Ok(event)
}

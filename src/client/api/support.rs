use portal::{
    model::{
        api::ApiError,
        support::{CreateSupportRequestDto, SupportRequestDto},
    },
    query::{Collection, QueryClient, QueryKey},
};

use super::{get, post, put};

/// Received support requests, employees only.
pub async fn list(queries: &QueryClient) -> Result<Vec<SupportRequestDto>, ApiError> {
    queries
        .fetch(QueryKey::list(Collection::SupportRequests), || {
            get("/api/support/requests")
        })
        .await
}

pub async fn create(
    queries: &QueryClient,
    request: &CreateSupportRequestDto,
) -> Result<SupportRequestDto, ApiError> {
    let created = post("/api/support/requests", request).await?;

    queries.invalidate_collection(Collection::SupportRequests);

    Ok(created)
}

pub async fn resolve(
    queries: &QueryClient,
    request_id: i32,
) -> Result<SupportRequestDto, ApiError> {
    let resolved = put(&format!("/api/support/requests/{}/resolve", request_id), &()).await?;

    queries.invalidate_collection(Collection::SupportRequests);

    Ok(resolved)
}

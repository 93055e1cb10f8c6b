use portal::{
    model::{api::ApiError, document::DocumentDto},
    query::{Collection, QueryClient, QueryKey},
};

use super::get;

pub async fn list(queries: &QueryClient) -> Result<Vec<DocumentDto>, ApiError> {
    queries
        .fetch(QueryKey::list(Collection::Documents), || get("/api/documents"))
        .await
}

use portal::{
    model::{api::ApiError, news::NewsDto},
    query::{Collection, QueryClient, QueryKey},
};

use super::{get, get_optional};

/// News ordered by publish date, newest first.
pub async fn list(queries: &QueryClient) -> Result<Vec<NewsDto>, ApiError> {
    queries
        .fetch(QueryKey::list(Collection::News), || get("/api/news"))
        .await
}

pub async fn article(queries: &QueryClient, news_id: i32) -> Result<Option<NewsDto>, ApiError> {
    queries
        .fetch(QueryKey::resource(Collection::News, news_id), move || async move {
            get_optional(&format!("/api/news/{}", news_id)).await
        })
        .await
}

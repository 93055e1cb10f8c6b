//! Typed client for the portal API.
//!
//! Every function maps HTTP failures into [`ApiError`] so pages only deal with the shared
//! error taxonomy. Requests are issued from the browser only; during server-side rendering
//! they never settle and pages render their loading state until hydration.

pub mod auth;
pub mod document;
pub mod event;
pub mod news;
pub mod profile;
pub mod support;

use serde::{de::DeserializeOwned, Serialize};

use portal::model::api::ApiError;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let body = transport::send(Method::Get, path, None).await?;
    decode(&body)
}

/// Like [`get`] but treats 404 as an absent resource.
async fn get_optional<T: DeserializeOwned>(path: &str) -> Result<Option<T>, ApiError> {
    match get(path).await {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = transport::send(Method::Post, path, Some(encode(body)?)).await?;
    decode(&body)
}

async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = transport::send(Method::Put, path, Some(encode(body)?)).await?;
    decode(&body)
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Transport(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "web")]
mod transport {
    use reqwasm::http::{Request, RequestCredentials};

    use portal::model::api::{ApiError, ErrorDto};

    use super::Method;

    pub(super) async fn send(
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let mut request = match method {
            Method::Get => Request::get(path),
            Method::Post => Request::post(path),
            Method::Put => Request::put(path),
        }
        .credentials(RequestCredentials::Include);

        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let message = serde_json::from_str::<ErrorDto>(&text)
            .map(|dto| dto.error)
            .unwrap_or(text);

        Err(ApiError::from_status(status, message))
    }
}

#[cfg(not(feature = "web"))]
mod transport {
    use dioxus_logger::tracing;

    use portal::model::api::ApiError;

    use super::Method;

    pub(super) async fn send(
        method: Method,
        path: &str,
        _body: Option<String>,
    ) -> Result<String, ApiError> {
        tracing::trace!(?method, path, "Deferring API request to the browser");

        futures::future::pending().await
    }
}

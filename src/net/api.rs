//! REST helpers for the `/api/tasks/` resource.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): `HttpTaskApi` answers every call with
//! [`ApiError::Unavailable`] since the endpoints only exist behind a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A non-2xx status counts as a
//! failure even if the body parses, so a 4xx error payload is never mistaken
//! for a task. Callers in `task_sync` log and swallow these.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewTask, Task, TaskId, TaskPatch};

/// Failure of a single task API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request body encoding failed: {0}")]
    Encode(String),
    #[error("task API not available outside the browser")]
    Unavailable,
}

/// The remote task collection. One method per REST verb.
///
/// Implementations must not retry or deduplicate; each call is exactly one
/// request.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// `GET <base>`
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    /// `POST <base>`
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;
    /// `PATCH <base><id>/`
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task, ApiError>;
    /// `DELETE <base><id>/`
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}

/// [`TaskApi`] over HTTP against a configured collection URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTaskApi {
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(any(test, feature = "csr"))]
fn collection_endpoint(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_owned()
    } else {
        format!("{base_url}/")
    }
}

#[cfg(any(test, feature = "csr"))]
fn task_endpoint(base_url: &str, id: &TaskId) -> String {
    format!("{}{id}/", collection_endpoint(base_url))
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = collection_endpoint(&self.base_url);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = collection_endpoint(&self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .json(task)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = task;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = task_endpoint(&self.base_url, id);
            let resp = gloo_net::http::Request::patch(&url)
                .json(patch)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, patch);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = task_endpoint(&self.base_url, id);
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

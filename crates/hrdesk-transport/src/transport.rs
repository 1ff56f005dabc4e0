//! Request transport

use serde::Serialize;
use std::sync::Arc;
use url::Url;

use crate::backend::HttpBackend;
use crate::error::ApiError;
use crate::request::{HttpRequest, Method, RequestBody};
use crate::response::{classify_response, ApiResponse};
use crate::Result;

/// Read access to the current bearer token.
///
/// The transport never writes the token; the session layer owns it.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

pub struct Transport {
    backend: Arc<dyn HttpBackend>,
    tokens: Arc<dyn TokenSource>,
    /// Origin without trailing slash; paths are appended verbatim
    base_url: String,
}

impl Transport {
    pub fn new(base_url: &Url, backend: Arc<dyn HttpBackend>, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            backend,
            tokens,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute::<()>(Method::Get, path, None).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::Post, path, Some(body)).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute::<()>(Method::Delete, path, None).await
    }

    /// Execute one logical request and classify the response.
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url_for(path)?;
        let body = match body {
            Some(body) => RequestBody::Json(
                serde_json::to_string(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?,
            ),
            None => RequestBody::Empty,
        };

        let request = HttpRequest {
            method,
            url,
            headers: self.headers(true),
            body,
        };

        self.dispatch(path, request).await
    }

    /// Multipart upload of a single file.
    ///
    /// Only the bearer header is set; the multipart encoder supplies the
    /// content type.
    pub async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse> {
        let request = HttpRequest {
            method: Method::Post,
            url: self.url_for(path)?,
            headers: self.headers(false),
            body: RequestBody::Multipart {
                field: field.to_string(),
                file_name: file_name.to_string(),
                bytes,
            },
        };

        self.dispatch(path, request).await
    }

    async fn dispatch(&self, path: &str, request: HttpRequest) -> Result<ApiResponse> {
        let method = request.method;
        tracing::debug!(%method, path, "Sending API request");

        let response = self.backend.send(request).await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "API request failed before a response");
            e
        })?;

        tracing::debug!(%method, path, status = response.status, "Received API response");

        classify_response(response.status, &response.body)
    }

    fn url_for(&self, path: &str) -> Result<String> {
        if path.is_empty() || !path.starts_with('/') {
            return Err(ApiError::InvalidRequest(format!(
                "Path must be server-relative: {path:?}"
            )));
        }

        Ok(format!("{}{}", self.base_url, path))
    }

    fn headers(&self, json: bool) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(2);

        if json {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        if let Some(token) = self.tokens.token().filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        headers
    }
}

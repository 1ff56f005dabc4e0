//! Authenticated API client
//!
//! Every call from the dashboard goes through here. The transport only
//! classifies a 401; this layer reacts to it by tearing the session down and
//! redirecting to login, then hands the error back to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use hrdesk_transport::{ApiError, ApiResponse, Method, Transport};

use crate::context::SessionContext;

type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiClient {
    transport: Arc<Transport>,
    context: SessionContext,
}

impl ApiClient {
    pub fn new(transport: Transport, context: SessionContext) -> Self {
        Self {
            transport: Arc::new(transport),
            context,
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<ApiResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        let result = self.transport.execute(method, path, body).await;
        self.intercept(method, path, result)
    }

    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.execute::<()>(Method::Get, path, None).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> ApiResult<ApiResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::Post, path, Some(body)).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> ApiResult<ApiResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.execute::<()>(Method::Delete, path, None).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get(path).await?.decode()
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.post(path, body).await?.decode()
    }

    pub async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<ApiResponse> {
        let result = self.transport.upload(path, field, file_name, bytes).await;
        self.intercept(Method::Post, path, result)
    }

    fn intercept(
        &self,
        method: Method,
        path: &str,
        result: ApiResult<ApiResponse>,
    ) -> ApiResult<ApiResponse> {
        if let Err(ApiError::Unauthorized) = &result {
            tracing::warn!(%method, path, "Unauthorized response, ending session");
            self.context.teardown();
        }
        result
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            context: self.context.clone(),
        }
    }
}

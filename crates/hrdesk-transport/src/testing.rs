//! In-memory HTTP backend for tests
//!
//! Replays canned responses per `(method, path)` and records every request.
//! When several responses are queued for a route they are served in order;
//! the last one keeps being served. Unknown routes answer 404.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::backend::HttpBackend;
use crate::error::ApiError;
use crate::request::{HttpRequest, HttpResponse, Method};
use crate::Result;

type Routes = HashMap<(Method, String), VecDeque<Result<HttpResponse>>>;

#[derive(Clone, Default)]
pub struct FakeBackend {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method path`
    pub fn on(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Ok(HttpResponse::new(status, body)))
    }

    /// Queue a network failure for `method path`
    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(ApiError::Network(message.to_string())))
    }

    fn push(&self, method: Method, path: &str, response: Result<HttpResponse>) -> &Self {
        self.routes
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

fn path_of(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    }
}

#[async_trait]
impl HttpBackend for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let key = (request.method, path_of(&request.url));
        self.requests.lock().push(request);

        let mut routes = self.routes.lock();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse::new(404, "Not Found"))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Ok(HttpResponse::new(404, "Not Found"))),
            None => Ok(HttpResponse::new(404, "Not Found")),
        }
    }
}

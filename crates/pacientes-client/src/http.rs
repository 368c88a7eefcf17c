//! HTTP transport for the pacientes backend.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::normalize;
use crate::notify::Notificador;

/// Pre-configured HTTP client for the pacientes backend.
///
/// Holds the base URL, the fixed JSON headers and the injected notification
/// port; nothing here mutates after construction. Every backend call in
/// this crate funnels through [`ApiClient::send`] or
/// [`ApiClient::send_json`], so the failure normalizer runs for every call.
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    notifier: Arc<dyn Notificador>,
}

impl ApiClient {
    /// Create a new client bound to `base_url`.
    pub fn new(base_url: &str, notifier: Arc<dyn Notificador>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
            notifier,
        })
    }

    /// Send a body-less request and decode the JSON response.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(method, path)).await
    }

    /// Send a request with a JSON body and decode the JSON response.
    pub async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(self.request(method, path).json(body)).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "sending request");
        self.inner.request(method, url)
    }

    /// Single egress point: every failure is run through the normalizer
    /// (diagnostic log + user notification) before the original error is
    /// returned unchanged.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        match Self::execute(request).await {
            Ok(decoded) => Ok(decoded),
            Err(err) => {
                normalize::report(&err, self.notifier.as_ref()).await;
                Err(err)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ApiError::Request(e)
            } else {
                ApiError::Connect(e)
            }
        })?;

        let status = response.status();
        // A transport failure while reading the body means the response was
        // never fully obtained.
        let text = response.text().await.map_err(ApiError::Connect)?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        // Confirmation endpoints may answer with an empty body.
        let text = if text.is_empty() { "null" } else { &text };
        serde_json::from_str(text).map_err(ApiError::Decode)
    }
}

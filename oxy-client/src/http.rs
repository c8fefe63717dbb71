//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Error body returned by the backend (`{ "message": "..." }`)
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Network HTTP client for the portal backend
///
/// Cheap to clone; every clone shares the same token cell, so a login or
/// logout through one handle is seen by all of them.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL is empty".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace (or clear) the bearer token
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder, path: &str) -> ClientResult<T> {
        let response = self.authorize(req).send().await?;
        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "backend response");
        Self::handle_response(status, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        status: StatusCode,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let body = response.bytes().await?;
        if !status.is_success() {
            let message = Self::error_message(status, &body);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(message)),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                _ => Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                }),
            };
        }
        let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &body
        };
        serde_json::from_slice(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Backend message if the body carries one, else the raw text, else the reason phrase
    fn error_message(status: StatusCode, body: &[u8]) -> String {
        if let Ok(api_err) = serde_json::from_slice::<ApiErrorResponse>(body)
            && let Some(message) = api_err.message.or(api_err.error)
        {
            return message;
        }
        let text = String::from_utf8_lossy(body).trim().to_string();
        if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        } else {
            text
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)), path).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body), path)
            .await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body), path)
            .await
    }

    /// Make a DELETE request; the response body is ignored
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.send(self.client.delete(self.url(path)), path).await?;
        Ok(())
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).multipart(form), path)
            .await
    }
}

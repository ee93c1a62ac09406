//! Request executor: one authenticated call, one normalized outcome.
//!
//! DESIGN
//! ======
//! `ApiClient` owns the base URL, a [`Transport`] and a [`CredentialStore`].
//! Callers observe exactly one of: a parsed [`Payload`], or an [`ApiError`]
//! carrying `status()` and `message()`. The executor never touches session
//! state and never retries.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, REQUEST_FAILED_MESSAGE};
use super::transport::{DefaultTransport, HttpRequest, HttpResponse, Method, Transport};
use crate::config::ApiConfig;
use crate::util::storage::{CredentialStore, DefaultStore};

/// Request body before encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(Value),
    /// Already a form payload; url-encoded as-is.
    Form(Vec<(String, String)>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    pub headers: Vec<(String, String)>,
    pub requires_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::Get, body: None, headers: Vec::new(), requires_auth: true }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self { method: Method::Post, ..Self::default() }
    }

    #[must_use]
    pub fn put() -> Self {
        Self { method: Method::Put, ..Self::default() }
    }

    #[must_use]
    pub fn delete() -> Self {
        Self { method: Method::Delete, ..Self::default() }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    #[must_use]
    pub fn form<K: Into<String>, V: Into<String>>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self {
        self.body = Some(RequestBody::Form(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Skip the credential check and the `Authorization` header.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// Successful response body.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Raw body of a non-JSON response.
    Text(String),
}

impl Payload {
    /// Deserialize into a typed model. Text bodies are parsed as JSON first.
    ///
    /// # Errors
    ///
    /// Returns a status-0 transport error when the body does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let parsed = match self {
            Self::Json(value) => serde_json::from_value(value),
            Self::Text(text) => serde_json::from_str(&text),
        };
        parsed.map_err(|e| ApiError::transport(e.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient<T = DefaultTransport, S = DefaultStore> {
    config: ApiConfig,
    transport: T,
    store: S,
}

impl<T: Transport, S: CredentialStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, store: S) -> Self {
        Self { config, transport, store }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Backing credential store, shared with the session layer.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Issue one request against `endpoint` (relative to the base URL).
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthRequired`] when auth is required and no credential is
    ///   stored; no request is sent.
    /// - [`ApiError::Transport`] when the call fails or the body is unparseable.
    /// - [`ApiError::Http`] for non-success statuses.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Payload, ApiError> {
        let request = self.prepare(endpoint, options)?;

        #[cfg(feature = "hydrate")]
        log::debug!("{} {}", request.method.as_str(), request.url);

        let method = request.method;
        let url = request.url.clone();
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(message) => {
                leptos::logging::warn!("{} {url} failed: {message}", method.as_str());
                return Err(ApiError::transport(message));
            }
        };

        let outcome = interpret(response);
        if let Err(e) = &outcome {
            leptos::logging::warn!("{} {url} -> {}: {e}", method.as_str(), e.status());
        }
        outcome
    }

    fn prepare(&self, endpoint: &str, options: RequestOptions) -> Result<HttpRequest, ApiError> {
        let RequestOptions { method, body, mut headers, requires_auth } = options;

        if requires_auth {
            let token = self.store.load().filter(|t| !t.is_empty()).ok_or(ApiError::AuthRequired)?;
            set_header(&mut headers, "Authorization", &format!("Bearer {token}"));
        }

        let body = body.map(|body| match body {
            RequestBody::Json(value) => {
                set_header(&mut headers, "Content-Type", "application/json");
                value.to_string()
            }
            RequestBody::Form(fields) => {
                set_header(&mut headers, "Content-Type", "application/x-www-form-urlencoded");
                url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields)
                    .finish()
            }
        });

        Ok(HttpRequest { method, url: self.config.url_for(endpoint), headers, body })
    }
}

/// Replace any existing header of the same name (case-insensitive).
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    headers.push((name.to_owned(), value.to_owned()));
}

/// Map a raw response onto the success/error contract.
fn interpret(response: HttpResponse) -> Result<Payload, ApiError> {
    let status = response.status;

    if !response.is_json() {
        if response.ok() {
            return Ok(Payload::Text(response.body));
        }
        let message = if response.status_text.is_empty() {
            REQUEST_FAILED_MESSAGE.to_owned()
        } else {
            response.status_text
        };
        return Err(ApiError::Http { status, message, details: None });
    }

    let body: Value = serde_json::from_str(&response.body).map_err(|e| ApiError::transport(e.to_string()))?;

    if !response.ok() {
        let message = body
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or(REQUEST_FAILED_MESSAGE)
            .to_owned();
        return Err(ApiError::Http { status, message, details: Some(body) });
    }

    Ok(Payload::Json(body))
}

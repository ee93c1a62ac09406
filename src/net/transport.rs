//! Single-shot HTTP transport.
//!
//! Client-side (hydrate): real `fetch` calls via `gloo-net`.
//! Server-side (SSR) and native builds: an offline transport that fails every
//! call, since the backend API is only reachable from the browser.

#![allow(async_fn_in_trait)]

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully prepared request: absolute URL, final headers, encoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A missing content type is treated as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(true, |ct| ct.contains("application/json"))
    }
}

/// Sends one request and reports either the response or a failure message.
pub trait Transport {
    /// # Errors
    ///
    /// Returns the underlying failure message when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Transport for builds without a browser. Every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Browser `fetch` transport. Cookies are sent along with every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| e.to_string())?;

        let resp = prepared.send().await.map_err(|e| e.to_string())?;
        let status = resp.status();
        let status_text = resp.status_text();
        let content_type = resp.headers().get("content-type");
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, status_text, content_type, body })
    }
}

/// Transport used by the running app for the current build target.
#[cfg(feature = "hydrate")]
pub type DefaultTransport = GlooTransport;
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = OfflineTransport;

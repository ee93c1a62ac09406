//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Default)]
struct Inner {
    replies: VecDeque<Result<HttpResponse, String>>,
    sent: Vec<HttpRequest>,
}

/// Replays queued replies in order and records every request it receives.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<Inner>>,
}

impl FakeTransport {
    pub fn reply(&self, reply: Result<HttpResponse, String>) -> &Self {
        self.inner.lock().unwrap().replies.push_back(reply);
        self
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply(Ok(json_response(status, &body)))
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().sent.clone()
    }

    pub fn last_sent(&self) -> HttpRequest {
        self.sent().pop().expect("at least one request sent")
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut inner = self.inner.lock().unwrap();
        inner.sent.push(request);
        inner.replies.pop_front().expect("no scripted reply left")
    }
}

pub fn json_response(status: u16, body: &serde_json::Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: String::new(),
        content_type: Some("application/json".to_owned()),
        body: body.to_string(),
    }
}

pub fn text_response(status: u16, status_text: &str, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text.to_owned(),
        content_type: Some("text/plain; charset=utf-8".to_owned()),
        body: body.to_owned(),
    }
}

//! HTTP seam between the client logic and whatever performs requests.
//!
//! The browser build plugs in `fetch`, the tester plugs in `reqwest`, and the
//! unit tests use [`MockTransport`]. Everything runs on a single event loop, so
//! futures are not required to be `Send`.

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt::Write as _;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Host-relative path, already percent-encoded.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_string);
        self
    }

    /// Absolute URL for `base` (trailing slashes on `base` are ignored).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        for (idx, (key, value)) in self.query.iter().enumerate() {
            url.push(if idx == 0 { '?' } else { '&' });
            url.push_str(&encode_component(key));
            url.push('=');
            url.push_str(&encode_component(value));
        }
        url
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Perform `request` and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

type Scripted = Result<HttpResponse, TransportError>;
type RequestHook = Box<dyn Fn(&HttpRequest)>;

/// Scripted in-memory transport that records every request it sees.
///
/// Responses are queued per `(method, path)`; the last queued response for a
/// route keeps answering once the queue drains. Unscripted routes answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    log: RefCell<Vec<HttpRequest>>,
    hook: RefCell<Option<RequestHook>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: HttpMethod, path: &str, reply: Scripted) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &Value) {
        self.push(
            method,
            path,
            Ok(HttpResponse::new(status, body.to_string())),
        );
    }

    pub fn respond_ok(&self, method: HttpMethod, path: &str, body: &Value) {
        self.respond(method, path, 200, body);
    }

    pub fn fail(&self, method: HttpMethod, path: &str, message: &str) {
        self.push(method, path, Err(TransportError::new(message)));
    }

    /// Run `hook` synchronously whenever a request arrives, before answering.
    pub fn on_request(&self, hook: impl Fn(&HttpRequest) + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|req| req.method == method && req.path == path)
            .count()
    }

    fn next_reply(&self, request: &HttpRequest) -> Scripted {
        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(&(request.method, request.path.clone())) else {
            return Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#));
        };
        if queue.len() > 1 {
            queue
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::new("empty script")))
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(TransportError::new("empty script")))
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log.borrow_mut().push(request.clone());
        if let Some(hook) = self.hook.borrow().as_ref() {
            hook(&request);
        }
        self.next_reply(&request)
    }
}

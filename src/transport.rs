//! Injected transport seam.
//!
//! The builder composes a [`TransportRequest`] and hands it to whatever
//! [`Transport`] the client was constructed with. The default
//! [`HttpTransport`] wraps `reqwest`; tests inject recording fakes.

use {
    crate::error::ApiResult,
    async_trait::async_trait,
    serde_json::Value,
    std::fmt::{Display, Formatter},
};

/// The closed verb set understood by resource endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully composed request, snapshotted from the builder state at
/// dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The injected HTTP transport.
///
/// Implementations receive the method, fully built URL (query string
/// included) and optional JSON body, and resolve to the parsed JSON
/// response. Status interpretation beyond success/failure is left to the
/// implementation; this crate passes transport failures through unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: TransportRequest) -> ApiResult<Value>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
        })
    }

    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, req: TransportRequest) -> ApiResult<Value> {
        let mut builder = match req.method {
            Method::Get => self.http.get(&req.url),
            Method::Post => self.http.post(&req.url),
            Method::Put => self.http.put(&req.url),
            Method::Patch => self.http.patch(&req.url),
            Method::Delete => self.http.delete(&req.url),
        };

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        let res = builder.send().await?.error_for_status()?;

        let text = res.text().await?;

        // DELETE and some actions legitimately return an empty body.
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

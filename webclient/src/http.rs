use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

use crate::error::*;
use crate::urls;

pub use ::reqwest::{Method, StatusCode};

/// Shared bearer-token slot.
///
/// Every resource client holds a clone of the same handle, so a single
/// [`BearerToken::set`] or [`BearerToken::clear`] is seen by all of them on their next request.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(Arc<RwLock<Option<String>>>);

impl BearerToken {
    pub fn new(token: Option<String>) -> Self {
        Self(Arc::new(RwLock::new(token)))
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(token.into());
    }

    pub fn clear(&self) {
        let mut slot = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_set(&self) -> bool {
        self.0.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

/// A single API call, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub form: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            form: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, query: impl Into<Vec<(String, String)>>) -> Self {
        self.query = query.into();
        self
    }

    pub fn form(mut self, form: serde_json::Value) -> Self {
        self.form = Some(form);
        self
    }

    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A completed HTTP exchange; the body is kept as text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, req: ApiRequest) -> Result<RawResponse>;
}

#[derive(Clone)]
pub struct HttpTransport {
    inner: ::reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: ::reqwest::Client::builder()
                .gzip(true)
                .build()
                .unwrap_or_default(),
            base_url,
        }
    }

    pub fn with_base_url_str(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| Error::InvalidUrl {
            url: base_url.to_owned(),
            source: e,
        })?;
        Ok(Self::new(url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(urls::BASE_URL.clone())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, req: ApiRequest) -> Result<RawResponse> {
        let endpoint = self.endpoint(&req.path);
        log::debug!("{} {} query={:?}", req.method, endpoint, req.query);

        let mut builder = self
            .inner
            .request(req.method, &endpoint)
            .header(USER_AGENT, HeaderValue::from_static(urls::USER_AGENT))
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(form) = &req.form {
            builder = builder.form(form);
        }
        if let Some(token) = &req.bearer {
            builder = builder.bearer_auth(token);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let url = resp.url().to_string();
        let body = resp.text().await?;
        log::debug!("{} <- {}", status, url);

        Ok(RawResponse { status, url, body })
    }
}

//! In-memory [`Transport`] for tests: replies from a queue and records every request.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::*;
use crate::http::{ApiRequest, RawResponse, StatusCode, Transport};
use crate::urls;

#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<(StatusCode, String)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply. Replies are consumed in FIFO order, one per request.
    pub fn reply(&self, status: u16, body: impl Into<String>) -> &Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back((status, body.into()));
        self
    }

    pub fn reply_json(&self, body: serde_json::Value) -> &Self {
        self.reply(200, body.to_string())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, req: ApiRequest) -> Result<RawResponse> {
        let url = format!("{}{}", urls::BASE_URL_STR, req.path);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req);

        let (status, body) = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedTransport: no reply queued for {}", url));
        Ok(RawResponse::new(status, url, body))
    }
}

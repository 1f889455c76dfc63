pub mod course;
pub mod problem;
pub mod problemset;
pub mod submission;
pub mod user;

pub use course::*;
pub use problem::*;
pub use problemset::*;
pub use submission::*;
pub use user::*;

use std::sync::Arc;

use crate::error::*;
use crate::http::{ApiRequest, BearerToken, RawResponse, Transport};

/// What every resource client needs: the shared transport and the shared token slot.
#[derive(Clone)]
pub struct ApiContext {
    transport: Arc<dyn Transport>,
    token: BearerToken,
}

impl ApiContext {
    pub fn new(transport: Arc<dyn Transport>, token: BearerToken) -> Self {
        Self { transport, token }
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    /// Sends `req` with whatever token is current at call time.
    pub(crate) async fn send(&self, req: ApiRequest) -> Result<RawResponse> {
        let req = req.bearer(self.token.get());
        self.transport.execute(req).await
    }
}

pub(crate) fn denied_to(action: &str, resource: &str) -> String {
    format!("You do not have permission to {} this {}.", action, resource)
}

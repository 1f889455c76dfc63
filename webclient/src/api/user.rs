use crate::error::*;
use crate::http::ApiRequest;
use crate::model::*;
use crate::{response, urls};

use super::ApiContext;

#[derive(Clone)]
pub struct UserClient {
    ctx: ApiContext,
}

impl UserClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn profile(&self) -> Result<Profile> {
        let resp = self.ctx.send(ApiRequest::get(urls::USER_PROFILE)).await?;
        response::parse_json(resp)
    }

    /// Courses the current user is enrolled in.
    pub async fn courses(&self) -> Result<Vec<Course>> {
        let resp = self.ctx.send(ApiRequest::get(urls::USER_COURSES)).await?;
        response::parse_page(resp, "courses").map(|page| page.items)
    }

    /// Problemsets the current user has joined.
    pub async fn problemsets(&self) -> Result<Vec<Problemset>> {
        let resp = self.ctx.send(ApiRequest::get(urls::USER_PROBLEMSETS)).await?;
        response::parse_page(resp, "problemsets").map(|page| page.items)
    }

    pub async fn oauth_token(&self, req: &OAuthTokenRequest) -> Result<OAuthToken> {
        let form = serde_json::json!({
            "grant_type": req.grant_type,
            "client_id": req.client_id,
            "client_secret": req.client_secret,
            "code": req.code,
            "redirect_uri": req.redirect_uri,
        });
        let resp = self
            .ctx
            .send(ApiRequest::post(urls::OAUTH_TOKEN).form(form))
            .await?;
        response::parse_json(resp)
    }
}

use crate::error::*;
use crate::http::ApiRequest;
use crate::model::*;
use crate::{response, urls};

use super::{denied_to, ApiContext};

#[derive(Clone)]
pub struct ProblemsetClient {
    ctx: ApiContext,
}

impl ProblemsetClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn get(&self, id: ProblemsetId) -> Result<Problemset> {
        let resp = self.ctx.send(ApiRequest::get(urls::problemset(id))).await?;
        response::parse_json(resp)
    }

    pub async fn join(&self, id: ProblemsetId) -> Result<()> {
        let resp = self
            .ctx
            .send(ApiRequest::post(urls::problemset_join(id)))
            .await?;
        response::expect_action(resp, &denied_to("join", "problemset"))
    }

    pub async fn quit(&self, id: ProblemsetId) -> Result<()> {
        let resp = self
            .ctx
            .send(ApiRequest::post(urls::problemset_quit(id)))
            .await?;
        response::expect_action(resp, &denied_to("quit", "problemset"))
    }
}

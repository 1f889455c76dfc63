use serde::{Deserialize, Serialize};

use crate::cursor::Page;
use crate::error::*;
use crate::http::ApiRequest;
use crate::model::*;
use crate::util::QueryParams;
use crate::{response, urls};

use super::{denied_to, ApiContext};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFilter {
    pub username: Option<String>,
    pub problem_id: Option<ProblemId>,
    pub status: Option<SubmissionStatus>,
    pub lang: Option<Language>,
    pub cursor: Option<String>,
}

impl SubmissionFilter {
    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor;
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("username", self.username.as_deref())
            .push_opt("problem_id", self.problem_id)
            .push_opt("status", self.status)
            .push_opt("lang", self.lang)
            .push_opt("cursor", self.cursor.as_deref())
    }
}

#[derive(Clone)]
pub struct SubmissionClient {
    ctx: ApiContext,
}

impl SubmissionClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, filter: &SubmissionFilter) -> Result<Page<SubmissionBrief>> {
        let req = ApiRequest::get(urls::SUBMISSIONS).query(filter.to_query());
        let resp = self.ctx.send(req).await?;
        response::parse_page(resp, "submissions")
    }

    pub async fn get(&self, id: SubmissionId) -> Result<Submission> {
        let resp = self.ctx.send(ApiRequest::get(urls::submission(id))).await?;
        response::parse_json(resp)
    }

    pub async fn abort(&self, id: SubmissionId) -> Result<()> {
        let resp = self
            .ctx
            .send(ApiRequest::post(urls::submission_abort(id)))
            .await?;
        response::expect_action(resp, &denied_to("abort", "submission"))
    }
}

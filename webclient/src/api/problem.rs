use serde::{Deserialize, Serialize};

use crate::cursor::Page;
use crate::error::*;
use crate::http::ApiRequest;
use crate::model::*;
use crate::util::QueryParams;
use crate::{response, urls};

use super::ApiContext;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemFilter {
    pub keyword: Option<String>,
    pub problemset_id: Option<ProblemsetId>,
    pub cursor: Option<String>,
}

impl ProblemFilter {
    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor;
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("keyword", self.keyword.as_deref())
            .push_opt("problemset_id", self.problemset_id)
            .push_opt("cursor", self.cursor.as_deref())
    }
}

/// Source code to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub language: Language,
    pub code: String,
    pub public: bool,
}

impl Solution {
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            public: false,
        }
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    fn to_form(&self) -> serde_json::Value {
        serde_json::json!({
            "language": self.language,
            "code": self.code,
            "public": self.public,
        })
    }
}

#[derive(Clone)]
pub struct ProblemClient {
    ctx: ApiContext,
}

impl ProblemClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, filter: &ProblemFilter) -> Result<Page<ProblemBrief>> {
        let req = ApiRequest::get(urls::PROBLEMS).query(filter.to_query());
        let resp = self.ctx.send(req).await?;
        response::parse_page(resp, "problems")
    }

    pub async fn get(&self, id: ProblemId) -> Result<Problem> {
        let resp = self.ctx.send(ApiRequest::get(urls::problem(id))).await?;
        response::parse_json(resp)
    }

    /// Returns the created submission; the server may fill in little more than its `id`.
    pub async fn submit(&self, id: ProblemId, solution: &Solution) -> Result<Submission> {
        let req = ApiRequest::post(urls::problem_submit(id)).form(solution.to_form());
        let resp = self.ctx.send(req).await?;
        response::parse_json(resp)
    }
}

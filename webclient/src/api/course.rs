use serde::{Deserialize, Serialize};

use crate::cursor::Page;
use crate::error::*;
use crate::http::ApiRequest;
use crate::model::*;
use crate::util::QueryParams;
use crate::{response, urls};

use super::{denied_to, ApiContext};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub keyword: Option<String>,
    pub term: Option<u64>,
    pub tag: Option<u64>,
    pub cursor: Option<String>,
}

impl CourseFilter {
    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor;
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("keyword", self.keyword.as_deref())
            .push_opt("term", self.term)
            .push_opt("tag", self.tag)
            .push_opt("cursor", self.cursor.as_deref())
    }
}

#[derive(Clone)]
pub struct CourseClient {
    ctx: ApiContext,
}

impl CourseClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, filter: &CourseFilter) -> Result<Page<Course>> {
        let req = ApiRequest::get(urls::COURSES).query(filter.to_query());
        let resp = self.ctx.send(req).await?;
        response::parse_page(resp, "courses")
    }

    pub async fn get(&self, id: CourseId) -> Result<Course> {
        let resp = self.ctx.send(ApiRequest::get(urls::course(id))).await?;
        response::parse_json(resp)
    }

    pub async fn join(&self, id: CourseId) -> Result<()> {
        let resp = self.ctx.send(ApiRequest::post(urls::course_join(id))).await?;
        response::expect_action(resp, &denied_to("join", "course"))
    }

    pub async fn quit(&self, id: CourseId) -> Result<()> {
        let resp = self.ctx.send(ApiRequest::post(urls::course_quit(id))).await?;
        response::expect_action(resp, &denied_to("quit", "course"))
    }

    pub async fn problemsets(&self, id: CourseId) -> Result<Vec<Problemset>> {
        let req = ApiRequest::get(urls::course_problemsets(id));
        let resp = self.ctx.send(req).await?;
        response::parse_page(resp, "problemsets").map(|page| page.items)
    }
}

use once_cell::sync::Lazy;
use url::Url;

use crate::model::{CourseId, ProblemId, ProblemsetId, SubmissionId};

pub const DOMAIN: &str = "acm.sjtu.edu.cn";
pub const BASE_URL_STR: &str = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1";
pub static BASE_URL: Lazy<Url> = Lazy::new(|| Url::parse(BASE_URL_STR).unwrap());

pub(crate) const USER_AGENT: &str = concat!("termoj/", env!("CARGO_PKG_VERSION"));

//-------------------------------------------------------------------------
// user

pub const USER_PROFILE: &str = "/user/profile";
pub const USER_COURSES: &str = "/user/courses";
pub const USER_PROBLEMSETS: &str = "/user/problemsets";
pub const OAUTH_TOKEN: &str = "/oauth/token";

//-------------------------------------------------------------------------
// course

pub const COURSES: &str = "/course/";

pub fn course(id: CourseId) -> String {
    format!("/course/{}", id)
}

pub fn course_join(id: CourseId) -> String {
    format!("/course/{}/join", id)
}

pub fn course_quit(id: CourseId) -> String {
    format!("/course/{}/quit", id)
}

pub fn course_problemsets(id: CourseId) -> String {
    format!("/course/{}/problemsets", id)
}

//-------------------------------------------------------------------------
// problem

pub const PROBLEMS: &str = "/problem/";

pub fn problem(id: ProblemId) -> String {
    format!("/problem/{}", id)
}

pub fn problem_submit(id: ProblemId) -> String {
    format!("/problem/{}/submit", id)
}

//-------------------------------------------------------------------------
// problemset

pub fn problemset(id: ProblemsetId) -> String {
    format!("/problemset/{}", id)
}

pub fn problemset_join(id: ProblemsetId) -> String {
    format!("/problemset/{}/join", id)
}

pub fn problemset_quit(id: ProblemsetId) -> String {
    format!("/problemset/{}/quit", id)
}

//-------------------------------------------------------------------------
// submission

pub const SUBMISSIONS: &str = "/submission/";

pub fn submission(id: SubmissionId) -> String {
    format!("/submission/{}", id)
}

pub fn submission_abort(id: SubmissionId) -> String {
    format!("/submission/{}/abort", id)
}

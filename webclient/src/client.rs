use std::sync::Arc;

use crate::api::*;
use crate::cursor::Page;
use crate::error::*;
use crate::http::{BearerToken, HttpTransport, Transport};
use crate::model::*;

/// Entry point of the API: composes all resource clients over one transport and one token slot.
///
/// A token update through [`OjClient::set_token`] or [`OjClient::clear_token`]
/// takes effect for every resource client on its very next request.
#[derive(Clone)]
pub struct OjClient {
    token: BearerToken,
    user: UserClient,
    course: CourseClient,
    problem: ProblemClient,
    problemset: ProblemsetClient,
    submission: SubmissionClient,
}

impl Default for OjClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OjClient {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::default()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let token = BearerToken::default();
        let ctx = ApiContext::new(transport, token.clone());
        Self {
            token,
            user: UserClient::new(ctx.clone()),
            course: CourseClient::new(ctx.clone()),
            problem: ProblemClient::new(ctx.clone()),
            problemset: ProblemsetClient::new(ctx.clone()),
            submission: SubmissionClient::new(ctx),
        }
    }

    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    //---------------------------------------------------------
    // token

    pub fn set_token(&self, token: impl Into<String>) {
        log::info!("Bearer token updated");
        self.token.set(token);
    }

    pub fn clear_token(&self) {
        log::info!("Bearer token cleared");
        self.token.clear();
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_set()
    }

    //---------------------------------------------------------
    // resource clients

    pub fn user(&self) -> &UserClient {
        &self.user
    }

    pub fn course(&self) -> &CourseClient {
        &self.course
    }

    pub fn problem(&self) -> &ProblemClient {
        &self.problem
    }

    pub fn problemset(&self) -> &ProblemsetClient {
        &self.problemset
    }

    pub fn submission(&self) -> &SubmissionClient {
        &self.submission
    }

    //---------------------------------------------------------
    // user

    pub async fn get_profile(&self) -> Result<Profile> {
        log::debug!("Fetching user profile");
        self.user.profile().await
    }

    pub async fn get_user_courses(&self) -> Result<Vec<Course>> {
        log::debug!("Fetching enrolled courses");
        self.user.courses().await
    }

    pub async fn get_user_problemsets(&self) -> Result<Vec<Problemset>> {
        log::debug!("Fetching joined problemsets");
        self.user.problemsets().await
    }

    pub async fn get_oauth_token(&self, req: &OAuthTokenRequest) -> Result<OAuthToken> {
        log::debug!("Exchanging OAuth code for client '{}'", req.client_id);
        self.user.oauth_token(req).await
    }

    //---------------------------------------------------------
    // course

    pub async fn get_courses(&self, filter: &CourseFilter) -> Result<Page<Course>> {
        log::debug!("Fetching courses {:?}", filter);
        self.course.list(filter).await
    }

    pub async fn get_course(&self, id: CourseId) -> Result<Course> {
        log::debug!("Fetching course {}", id);
        self.course.get(id).await
    }

    pub async fn join_course(&self, id: CourseId) -> Result<()> {
        log::info!("Joining course {}", id);
        self.course.join(id).await
    }

    pub async fn quit_course(&self, id: CourseId) -> Result<()> {
        log::info!("Quitting course {}", id);
        self.course.quit(id).await
    }

    pub async fn get_course_problemsets(&self, id: CourseId) -> Result<Vec<Problemset>> {
        log::debug!("Fetching problemsets of course {}", id);
        self.course.problemsets(id).await
    }

    //---------------------------------------------------------
    // problem

    pub async fn get_problems(&self, filter: &ProblemFilter) -> Result<Page<ProblemBrief>> {
        log::debug!("Fetching problems {:?}", filter);
        self.problem.list(filter).await
    }

    pub async fn get_problem(&self, id: ProblemId) -> Result<Problem> {
        log::debug!("Fetching problem {}", id);
        self.problem.get(id).await
    }

    pub async fn submit_solution(&self, id: ProblemId, solution: &Solution) -> Result<Submission> {
        log::info!(
            "Submitting {} bytes of {} to problem {} (public: {})",
            solution.code.len(),
            solution.language,
            id,
            solution.public
        );
        self.problem.submit(id, solution).await
    }

    //---------------------------------------------------------
    // problemset

    pub async fn get_problemset(&self, id: ProblemsetId) -> Result<Problemset> {
        log::debug!("Fetching problemset {}", id);
        self.problemset.get(id).await
    }

    pub async fn join_problemset(&self, id: ProblemsetId) -> Result<()> {
        log::info!("Joining problemset {}", id);
        self.problemset.join(id).await
    }

    pub async fn quit_problemset(&self, id: ProblemsetId) -> Result<()> {
        log::info!("Quitting problemset {}", id);
        self.problemset.quit(id).await
    }

    //---------------------------------------------------------
    // submission

    pub async fn get_submissions(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Page<SubmissionBrief>> {
        log::debug!("Fetching submissions {:?}", filter);
        self.submission.list(filter).await
    }

    pub async fn get_submission(&self, id: SubmissionId) -> Result<Submission> {
        log::debug!("Fetching submission {}", id);
        self.submission.get(id).await
    }

    pub async fn abort_submission(&self, id: SubmissionId) -> Result<()> {
        log::info!("Aborting submission {}", id);
        self.submission.abort(id).await
    }
}

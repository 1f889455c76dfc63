pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}

use std::path::Path;

use error::*;
use termoj_webclient::{
    Language, OjClient, Page, ProblemId, Problemset, Profile, Solution, Submission,
    SubmissionBrief, SubmissionFilter,
};

use crate::client::PersistentClient;

const NOT_LOGGED_IN: &str = "Not logged in. Run `termoj auth login <TOKEN>` first";

/// Verifies `token` against the profile endpoint and stores it on success.
///
/// The previous token is put back if verification fails, and nothing is written.
pub async fn login(cli: &mut PersistentClient, token: &str) -> Result<Profile> {
    let token = token.trim();
    ensure!(!token.is_empty(), "Token must not be empty");

    let previous = cli.token();
    cli.set_token(token);

    let profile = match cli.get_profile().await {
        Ok(profile) => profile,
        Err(e) => {
            match previous {
                Some(prev) => cli.set_token(prev),
                None => cli.clear_token(),
            }
            return Err(e).context("Failed to verify the token");
        }
    };

    cli.save_token(token)?;
    log::info!("Logged in as {}", profile.username);
    Ok(profile)
}

pub fn logout(cli: &mut PersistentClient) -> Result<()> {
    if cli.token_from_env() {
        log::warn!("TERMOJ_TOKEN is set; it will still be used by later commands");
    }
    cli.forget_token()
}

pub async fn whoami(cli: &OjClient) -> Result<Profile> {
    ensure!(cli.has_token(), NOT_LOGGED_IN);
    cli.get_profile()
        .await
        .context("Failed to fetch the user profile")
}

pub async fn submit_file(
    cli: &OjClient,
    problem_id: ProblemId,
    path: &Path,
    language: Language,
    public: bool,
) -> Result<Submission> {
    ensure!(cli.has_token(), NOT_LOGGED_IN);

    let code = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read source file {:?}", path))?;
    ensure!(!code.trim().is_empty(), "Source file {:?} is empty", path);

    log::info!(
        "Submitting {:?} ({} bytes, {}) to problem {}",
        path,
        code.len(),
        language,
        problem_id
    );
    let solution = Solution::new(language, code).public(public);
    cli.submit_solution(problem_id, &solution)
        .await
        .with_context(|| format!("Failed to submit {:?} to problem {}", path, problem_id))
}

/// Lists submissions; unless `all_users`, the filter is pinned to the logged-in user.
pub async fn list_submissions(
    cli: &OjClient,
    mut filter: SubmissionFilter,
    all_users: bool,
) -> Result<Page<SubmissionBrief>> {
    if !all_users && filter.username.is_none() {
        let profile = whoami(cli).await?;
        filter.username = Some(profile.username);
    }
    cli.get_submissions(&filter)
        .await
        .context("Failed to list submissions")
}

/// Problemsets the user has joined, ordered by id.
pub async fn joined_problemsets(cli: &OjClient) -> Result<Vec<Problemset>> {
    let mut sets = cli
        .get_user_problemsets()
        .await
        .context("Failed to list joined problemsets")?;
    sets.sort_by_key(|set| set.id);
    Ok(sets)
}

use super::{GlobalArgs, Session, SubcmdResult};
use crate::view;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Courses you are enrolled in
    Courses,

    /// Problemsets you have joined (homework, exams, contests)
    Problemsets,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let Session { cli, out } = Session::open(global_args)?;

    match &args.cmd {
        Cmd::Courses => {
            let courses = cli.get_user_courses().await?;
            if courses.is_empty() {
                out.info("You are not enrolled in any courses.");
                return Ok(());
            }
            view::courses(&courses).show(out.as_ref());
        }
        Cmd::Problemsets => {
            let sets = cli.get_user_problemsets().await?;
            if sets.is_empty() {
                out.info("You are not enrolled in any problemsets.");
                return Ok(());
            }
            view::problemsets(&sets).show(out.as_ref());
        }
    }
    Ok(())
}

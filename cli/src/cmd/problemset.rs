use termoj_core::action;
use termoj_webclient::ProblemsetId;

use super::{GlobalArgs, Session, SubcmdResult};
use crate::view;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Problemsets you have joined, by ID
    List,

    Show { id: ProblemsetId },

    Join { id: ProblemsetId },

    Quit { id: ProblemsetId },
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let Session { cli, out } = Session::open(global_args)?;

    match &args.cmd {
        Cmd::List => {
            let sets = action::joined_problemsets(&cli).await?;
            if sets.is_empty() {
                out.info("No problemsets found.");
                return Ok(());
            }
            view::problemsets(&sets).show(out.as_ref());
        }
        Cmd::Show { id } => {
            let ps = cli.get_problemset(*id).await?;
            view::problemset_detail(&ps).show(out.as_ref());

            let problems = ps.problems.get().map(Vec::as_slice).unwrap_or_default();
            if !problems.is_empty() {
                out.plain("Problems in Problemset:");
                view::problems(problems).show(out.as_ref());
            }
        }
        Cmd::Join { id } => {
            cli.join_problemset(*id).await?;
            out.success(&format!("Successfully joined problemset {}", id));
        }
        Cmd::Quit { id } => {
            cli.quit_problemset(*id).await?;
            out.success(&format!("Successfully quit problemset {}", id));
        }
    }
    Ok(())
}

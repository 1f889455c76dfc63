use std::path::PathBuf;

use termoj_core::action;
use termoj_webclient::{ProblemFilter, ProblemId, ProblemsetId};

use super::{ArgLanguage, GlobalArgs, Session, SubcmdResult};
use crate::view;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Search problems
    List {
        #[arg(long)]
        keyword: Option<String>,

        /// Only problems of this problemset
        #[arg(long)]
        problemset: Option<ProblemsetId>,

        #[arg(long)]
        cursor: Option<String>,
    },

    /// Print the problem statement
    Show {
        id: ProblemId,

        /// Print the raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a source file
    Submit {
        id: ProblemId,

        file: PathBuf,

        #[arg(short, long)]
        language: ArgLanguage,

        /// Make the submission visible to others
        #[arg(long)]
        public: bool,
    },
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = Session::open(global_args)?;
    let Session { cli, out } = &session;

    match &args.cmd {
        Cmd::List {
            keyword,
            problemset,
            cursor,
        } => {
            let filter = ProblemFilter {
                keyword: keyword.clone(),
                problemset_id: *problemset,
                cursor: cursor.clone(),
            };
            let page = cli.get_problems(&filter).await?;
            if page.is_empty() {
                out.info("No problems found.");
                return Ok(());
            }
            view::problems(&page.items).show(out.as_ref());
            session.cursor_hint(page.next_cursor.as_deref());
        }
        Cmd::Show { id, json } => {
            let problem = cli.get_problem(*id).await?;
            if *json {
                serde_json::to_writer_pretty(std::io::stdout(), &problem)?;
                println!();
                return Ok(());
            }

            out.plain(&format!("Problem {}: {}\n", problem.id, problem.title));
            for (title, body) in view::problem_sections(&problem) {
                out.section(&title, &body);
            }
        }
        Cmd::Submit {
            id,
            file,
            language,
            public,
        } => {
            let sub = action::submit_file(cli, *id, file, language.into(), *public).await?;
            out.success(&format!(
                "Solution submitted successfully!\nSubmission ID: {}",
                sub.id
            ));
            out.info(&format!(
                "Use 'termoj submission status {} --watch' to follow the result.",
                sub.id
            ));
        }
    }
    Ok(())
}

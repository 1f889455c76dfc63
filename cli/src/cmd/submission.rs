use std::io::Write as _;
use std::time::Duration;

use crossterm::{cursor, execute, terminal};
use termoj_core::{
    action, interactive,
    watch::{self, TokioSleeper, WatchOptions},
};
use termoj_webclient::{ProblemId, SubmissionFilter, SubmissionId, SubmissionStatus};

use super::{parse_status, ArgLanguage, GlobalArgs, Session, SubcmdResult};
use crate::view;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Show the judge result of a submission
    Status {
        id: SubmissionId,

        /// Keep polling until the judge is done
        #[arg(short, long)]
        watch: bool,

        /// Polling interval in seconds
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },

    /// List submissions (yours, unless --all)
    List {
        #[arg(short, long)]
        problem: Option<ProblemId>,

        #[arg(short, long, value_parser = parse_status)]
        status: Option<SubmissionStatus>,

        #[arg(short, long)]
        language: Option<ArgLanguage>,

        #[arg(short, long)]
        cursor: Option<String>,

        /// Include submissions of every user
        #[arg(long)]
        all: bool,
    },

    /// Stop judging a submission
    Abort { id: SubmissionId },
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = Session::open(global_args)?;
    let Session { cli, out } = &session;

    match &args.cmd {
        Cmd::Status {
            id,
            watch: false,
            ..
        } => {
            let sub = cli.get_submission(*id).await?;
            view::submission_detail(&sub, out.as_ref()).show(out.as_ref());
        }
        Cmd::Status {
            id,
            watch: true,
            interval,
        } => {
            let opts = WatchOptions {
                interval: Duration::from_secs(*interval),
                ..Default::default()
            };
            let spinner = interactive::new_spinner("Waiting for the judge...");
            let result = watch::watch_submission(cli, *id, &opts, &TokioSleeper, |sub, poll| {
                spinner.suspend(|| {
                    redraw();
                    out.plain(&format!(
                        "Watching submission {} (poll #{}, Ctrl+C to stop)",
                        id, poll
                    ));
                    view::submission_detail(sub, out.as_ref()).show(out.as_ref());
                });
            })
            .await;
            spinner.finish_and_clear();

            let sub = result?;
            match sub.status {
                Some(status) if status.is_accepted() => out.success("Accepted!"),
                Some(status) => out.plain(&format!("Finished: {}", out.render_status(status))),
                None => {}
            }
        }
        Cmd::List {
            problem,
            status,
            language,
            cursor,
            all,
        } => {
            let filter = SubmissionFilter {
                username: None,
                problem_id: *problem,
                status: *status,
                lang: language.map(Into::into),
                cursor: cursor.clone(),
            };
            let page = action::list_submissions(cli, filter, *all).await?;
            if page.is_empty() {
                out.info("No submissions found.");
                return Ok(());
            }
            view::submissions(&page.items, out.as_ref()).show(out.as_ref());
            session.cursor_hint(page.next_cursor.as_deref());
        }
        Cmd::Abort { id } => {
            cli.abort_submission(*id).await?;
            out.success(&format!("Aborted submission {}", id));
        }
    }
    Ok(())
}

fn redraw() {
    let mut stdout = std::io::stdout();
    let res = execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
    if let Err(e) = res {
        log::debug!("Cannot clear the terminal: {}", e);
    }
    let _ = stdout.flush();
}

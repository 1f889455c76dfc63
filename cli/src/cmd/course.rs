use termoj_core::interactive;
use termoj_webclient::{CourseFilter, CourseId};

use super::{GlobalArgs, Session, SubcmdResult};
use crate::view;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Browse all courses page by page
    List {
        #[arg(long)]
        keyword: Option<String>,

        /// Term ID
        #[arg(long)]
        term: Option<u64>,

        /// Tag ID
        #[arg(long)]
        tag: Option<u64>,

        #[arg(long)]
        cursor: Option<String>,
    },

    /// Courses you are enrolled in
    Enrolled,

    Show { id: CourseId },

    Join { id: CourseId },

    Quit { id: CourseId },

    /// Problemsets of a course
    Problemsets { id: CourseId },
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let Session { cli, out } = Session::open(global_args)?;

    match &args.cmd {
        Cmd::List {
            keyword,
            term,
            tag,
            cursor,
        } => {
            let mut filter = CourseFilter {
                keyword: keyword.clone(),
                term: *term,
                tag: *tag,
                cursor: cursor.clone(),
            };
            for page_number in 1.. {
                out.info(&format!("Courses - Page {}", page_number));
                let page = cli.get_courses(&filter).await?;
                if page.is_empty() {
                    out.info("No more courses found.");
                    break;
                }
                view::courses(&page.items).show(out.as_ref());

                let Some(next) = page.next_cursor else {
                    out.info("End of results. No more pages available.");
                    break;
                };
                if !interactive::ask_next_page()? {
                    break;
                }
                filter = filter.with_cursor(Some(next));
            }
        }
        Cmd::Enrolled => {
            let courses = cli.get_user_courses().await?;
            if courses.is_empty() {
                out.info("You are not enrolled in any courses.");
                return Ok(());
            }
            view::courses(&courses).show(out.as_ref());
        }
        Cmd::Show { id } => {
            let course = cli.get_course(*id).await?;
            out.plain(&format!("Course Details: {} (ID: {})", course.name, course.id));
            view::course_detail(&course).show(out.as_ref());

            let mut actions = Vec::new();
            if course.can_join() {
                actions.push("You can join this course");
            }
            if course.can_quit() {
                actions.push("You can quit this course");
            }
            if actions.is_empty() {
                out.info("No actions available for this course.");
            } else {
                out.info(&actions.join("\n"));
            }
        }
        Cmd::Join { id } => {
            cli.join_course(*id).await?;
            out.success(&format!("Successfully joined course {}", id));
        }
        Cmd::Quit { id } => {
            cli.quit_course(*id).await?;
            out.success(&format!("Successfully quit course {}", id));
        }
        Cmd::Problemsets { id } => {
            let sets = cli.get_course_problemsets(*id).await?;
            if sets.is_empty() {
                out.info("No problemsets found in this course.");
                return Ok(());
            }
            view::course_problemsets(&sets).show(out.as_ref());
        }
    }
    Ok(())
}

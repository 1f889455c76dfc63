pub mod auth;
pub mod config;
pub mod course;
pub mod problem;
pub mod problemset;
pub mod submission;
pub mod user;

use std::path::PathBuf;

use termoj_core::{presenter, DisplayMode, PersistentClient, Presenter};
use termoj_webclient::{Language, SubmissionStatus};

use crate::config::GlobalConfig;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Directory holding config.toml [env: TERMOJ_CONFIG_DIR]
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Display mode for this invocation only
    #[arg(long, global = true)]
    pub display: Option<ArgDisplayMode>,

    /// -v for info logs, -vv for debug logs
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    /// Log in, log out and show the current user
    Auth(auth::Args),

    /// View and change settings
    Config(config::Args),

    /// Browse, join and quit courses
    Course(course::Args),

    /// Show problems and submit solutions
    #[command(alias("p"))]
    Problem(problem::Args),

    /// Browse, join and quit problemsets
    Problemset(problemset::Args),

    /// Check, list and abort submissions
    #[command(alias("s"))]
    Submission(submission::Args),

    /// Courses and problemsets of the current user
    User(user::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Auth(args) => auth::exec(args, self).await,
            Config(args) => config::exec(args, self),
            Course(args) => course::exec(args, self).await,
            Problem(args) => problem::exec(args, self).await,
            Problemset(args) => problemset::exec(args, self).await,
            Submission(args) => submission::exec(args, self).await,
            User(args) => user::exec(args, self).await,
        }
    }
}

/// Client and presenter for the commands that talk to the judge.
pub struct Session {
    pub cli: PersistentClient,
    pub out: Box<dyn Presenter>,
}

impl Session {
    pub fn open(global_args: &GlobalArgs) -> anyhow::Result<Self> {
        let cfg = GlobalConfig::from_env_and_args(global_args)?;
        let cli = cfg.new_client()?;
        let out = presenter(cfg.display_mode(cli.config()));
        Ok(Self { cli, out })
    }

    /// Prints a hint when `next_cursor` says more pages exist.
    pub fn cursor_hint(&self, next_cursor: Option<&str>) {
        if let Some(cursor) = next_cursor {
            self.out.info(&format!("Next cursor: {}", cursor));
            self.out
                .info("Use '--cursor <cursor>' to load the next page.");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ArgDisplayMode {
    Plain,
    Rich,
    Cartoon,
}

impl From<ArgDisplayMode> for DisplayMode {
    fn from(value: ArgDisplayMode) -> Self {
        use ArgDisplayMode::*;
        match value {
            Plain => DisplayMode::Plain,
            Rich => DisplayMode::Rich,
            Cartoon => DisplayMode::Cartoon,
        }
    }
}

/// Languages a solution can be submitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ArgLanguage {
    Cpp,
    Python,
    Java,
    Git,
    Verilog,
}

impl From<ArgLanguage> for Language {
    fn from(value: ArgLanguage) -> Self {
        use ArgLanguage::*;
        match value {
            Cpp => Language::Cpp,
            Python => Language::Python,
            Java => Language::Java,
            Git => Language::Git,
            Verilog => Language::Verilog,
        }
    }
}

impl From<&ArgLanguage> for Language {
    fn from(&value: &ArgLanguage) -> Self {
        value.into()
    }
}

pub fn parse_status(s: &str) -> Result<SubmissionStatus, String> {
    s.parse().map_err(|_| {
        use strum::IntoEnumIterator as _;
        let names: Vec<String> = SubmissionStatus::iter().map(|x| x.to_string()).collect();
        format!("unknown status '{}' (one of: {})", s, names.join(", "))
    })
}

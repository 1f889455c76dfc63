use termoj_core::action;

use super::{GlobalArgs, Session, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Log in with a personal access token (ACM-OJ: Profile -> API -> Generate Token)
    Login {
        #[arg()] // positional argument
        token: String,
    },

    /// Show the current user
    Whoami,

    /// Forget the stored token
    Logout,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let Session { mut cli, out } = Session::open(global_args)?;

    match &args.cmd {
        Cmd::Login { token } => {
            let profile = action::login(&mut cli, token).await?;
            out.success(&format!("Successfully logged in as {}!", profile.username));
        }
        Cmd::Whoami => {
            let profile = action::whoami(&cli).await?;
            let mut lines = vec![format!("Logged in as: {}", profile.username)];
            if let Some(name) = profile.friendly_name.non_blank() {
                lines.push(format!("Name: {}", name));
            }
            if let Some(sid) = profile.student_id.non_blank() {
                lines.push(format!("Student ID: {}", sid));
            }
            out.plain(&lines.join("\n"));
        }
        Cmd::Logout => {
            action::logout(&mut cli)?;
            out.success("Successfully logged out!");
        }
    }
    Ok(())
}

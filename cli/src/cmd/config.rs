use termoj_core::{interactive, UserConfig};

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    /// Show the current settings
    View,

    /// Print the value of one option
    Get { option: String },

    /// Change an option, e.g. `config set display_mode plain`
    Set { option: String, value: String },

    /// Restore the default settings (also removes the login token)
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Write a commented config.toml if none exists yet
    Init,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_env_and_args(global_args)?;
    let path = cfg.user_config_path();
    let mut user = cfg.load_user_config()?;
    let out = termoj_core::presenter(cfg.display_mode(&user));

    match &args.cmd {
        Cmd::View => {
            let logged_in = if cfg.env_token.is_some() {
                "yes (TERMOJ_TOKEN)"
            } else if user.token.is_some() {
                "yes"
            } else {
                "no"
            };
            let rows = vec![
                vec!["Display Mode".to_owned(), cfg.display_mode(&user).to_string()],
                vec![
                    "Config File".to_owned(),
                    util::replace_homedir_to_tilde(&path).display().to_string(),
                ],
                vec!["API Base URL".to_owned(), cfg.base_url.to_string()],
                vec!["Logged In".to_owned(), logged_in.to_owned()],
            ];
            out.table(&["Setting", "Value"], &rows);
        }
        Cmd::Get { option } => {
            out.plain(&user.get(option)?);
        }
        Cmd::Set { option, value } => {
            user.set(option, value)?;
            user.save(&path)?;
            out.success(&format!("Set {} = {}", option, value));
        }
        Cmd::Reset { yes } => {
            if !yes && !interactive::util::confirm("Reset all settings to defaults?", false)? {
                out.info("Aborted.");
                return Ok(());
            }
            UserConfig::default().save(&path)?;
            out.success("Settings reset to defaults.");
        }
        Cmd::Init => {
            let shown = util::replace_homedir_to_tilde(&path);
            if UserConfig::init_file(&path)? {
                out.success(&format!("Created {}", shown.display()));
            } else {
                out.warn(&format!("{} already exists", shown.display()));
            }
        }
    }
    Ok(())
}

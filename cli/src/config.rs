use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use serde::Deserialize;
use termoj_core::{config::APP_NAME, DisplayMode, PersistentClient, UserConfig};
use termoj_webclient::{http::HttpTransport, urls, OjClient, Url};

use crate::cmd::GlobalArgs;

/// `TERMOJ_*` environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub config_dir: Option<PathBuf>,
}

impl EnvConfig {
    pub const PREFIX: &str = "TERMOJ_";

    pub fn from_env() -> anyhow::Result<Self> {
        envy::prefixed(Self::PREFIX)
            .from_env()
            .context("Invalid TERMOJ_* environment variable")
    }
}

/// Settings of one invocation: command-line flags > environment > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    pub config_dir: PathBuf,
    pub base_url: Url,
    pub env_token: Option<String>,
    pub display_override: Option<DisplayMode>,
}

impl GlobalConfig {
    pub fn default_config_dir() -> anyhow::Result<PathBuf> {
        let dir = dirs::config_dir().context("Failed to get user's config dir path")?;
        Ok(dir.join(APP_NAME))
    }

    pub fn resolve(env: EnvConfig, args: &GlobalArgs) -> anyhow::Result<Self> {
        let config_dir = match args.config_dir.clone().or(env.config_dir) {
            Some(dir) => dir,
            None => Self::default_config_dir()?,
        };
        let base_url = match env.base_url.as_deref() {
            Some(s) => Url::parse(s).with_context(|| format!("Invalid TERMOJ_BASE_URL '{}'", s))?,
            None => urls::BASE_URL.clone(),
        };

        Ok(Self {
            config_dir,
            base_url,
            env_token: env.token,
            display_override: args.display.map(Into::into),
        })
    }

    pub fn from_env_and_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        Self::resolve(EnvConfig::from_env()?, args)
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.config_dir.join(UserConfig::FILENAME)
    }

    pub fn load_user_config(&self) -> anyhow::Result<UserConfig> {
        UserConfig::load(&self.user_config_path())
    }

    pub fn display_mode(&self, user: &UserConfig) -> DisplayMode {
        self.display_override.unwrap_or(user.display_mode)
    }

    pub fn new_client(&self) -> anyhow::Result<PersistentClient> {
        log::debug!("API base: {}", self.base_url);
        let transport = HttpTransport::new(self.base_url.clone());
        let cli = OjClient::with_transport(Arc::new(transport));
        PersistentClient::new(cli, self.user_config_path(), self.env_token.clone())
    }
}

#[cfg(test)]
mod test {
    use clap::Parser as _;

    use super::*;

    fn args(argv: &[&str]) -> GlobalArgs {
        GlobalArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flag_beats_env() {
        let env = EnvConfig {
            config_dir: Some("/from/env".into()),
            ..Default::default()
        };
        let cfg = GlobalConfig::resolve(
            env.clone(),
            &args(&["termoj", "--config-dir", "/from/flag", "auth", "whoami"]),
        )
        .unwrap();
        assert_eq!(cfg.config_dir, PathBuf::from("/from/flag"));
        assert_eq!(
            cfg.user_config_path(),
            PathBuf::from("/from/flag/config.toml")
        );

        let cfg = GlobalConfig::resolve(env, &args(&["termoj", "auth", "whoami"])).unwrap();
        assert_eq!(cfg.config_dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn base_url_from_env() {
        let env = EnvConfig {
            base_url: Some("http://localhost:8000/api/v1".to_owned()),
            config_dir: Some("/tmp/x".into()),
            ..Default::default()
        };
        let cfg = GlobalConfig::resolve(env, &args(&["termoj", "auth", "whoami"])).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://localhost:8000/api/v1");

        let env = EnvConfig {
            base_url: Some("not a url".to_owned()),
            config_dir: Some("/tmp/x".into()),
            ..Default::default()
        };
        assert!(GlobalConfig::resolve(env, &args(&["termoj", "auth", "whoami"])).is_err());
    }

    #[test]
    fn display_flag_overrides_file() {
        let env = EnvConfig {
            config_dir: Some("/tmp/x".into()),
            ..Default::default()
        };
        let user = UserConfig {
            display_mode: DisplayMode::Cartoon,
            ..Default::default()
        };

        let cfg = GlobalConfig::resolve(env.clone(), &args(&["termoj", "auth", "whoami"])).unwrap();
        assert_eq!(cfg.display_mode(&user), DisplayMode::Cartoon);

        let cfg = GlobalConfig::resolve(
            env,
            &args(&["termoj", "--display", "plain", "auth", "whoami"]),
        )
        .unwrap();
        assert_eq!(cfg.display_mode(&user), DisplayMode::Plain);
    }
}

use std::{
    ops::Deref,
    path::{Path, PathBuf},
};

use termoj_webclient::OjClient;

use crate::config::UserConfig;

/// An [`OjClient`] whose token survives the process through the user config file.
///
/// A token given via the environment wins over the stored one and is never written back.
pub struct PersistentClient {
    cli: OjClient,
    config: UserConfig,
    config_path: PathBuf,
    env_token: bool,
}

impl Deref for PersistentClient {
    type Target = OjClient;

    fn deref(&self) -> &Self::Target {
        &self.cli
    }
}

impl PersistentClient {
    pub fn new(
        cli: OjClient,
        config_path: impl Into<PathBuf>,
        env_token: Option<String>,
    ) -> anyhow::Result<Self> {
        let config_path = config_path.into();
        let config = UserConfig::load(&config_path)?;

        let env_token = env_token.filter(|t| !t.trim().is_empty());
        let env_set = env_token.is_some();
        match env_token.or_else(|| config.token.clone()) {
            Some(token) => cli.set_token(token),
            None => cli.clear_token(),
        }
        log::debug!(
            "Session loaded from {:?} (token from env: {})",
            config_path,
            env_set
        );

        Ok(Self {
            cli,
            config,
            config_path,
            env_token: env_set,
        })
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn token_from_env(&self) -> bool {
        self.env_token
    }

    pub fn is_logged_in(&self) -> bool {
        self.cli.has_token()
    }

    pub fn save_token(&mut self, token: &str) -> anyhow::Result<()> {
        self.cli.set_token(token);
        self.config.token = Some(token.to_owned());
        self.config.save(&self.config_path)
    }

    pub fn forget_token(&mut self) -> anyhow::Result<()> {
        self.cli.clear_token();
        self.config.token = None;
        self.config.save(&self.config_path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn loads_token_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(UserConfig::FILENAME);
        std::fs::write(&path, "token = \"from-file\"\n").unwrap();

        let cli = PersistentClient::new(OjClient::new(), &path, None).unwrap();
        assert_eq!(cli.token().as_deref(), Some("from-file"));
        assert!(!cli.token_from_env());
    }

    #[test]
    fn env_token_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(UserConfig::FILENAME);
        std::fs::write(&path, "token = \"from-file\"\n").unwrap();

        let cli =
            PersistentClient::new(OjClient::new(), &path, Some("from-env".to_owned())).unwrap();
        assert_eq!(cli.token().as_deref(), Some("from-env"));
        assert!(cli.token_from_env());

        // Blank env values are ignored:
        let cli = PersistentClient::new(OjClient::new(), &path, Some(" ".to_owned())).unwrap();
        assert_eq!(cli.token().as_deref(), Some("from-file"));
    }

    #[test]
    fn save_and_forget_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(UserConfig::FILENAME);

        let mut cli = PersistentClient::new(OjClient::new(), &path, None).unwrap();
        assert!(!cli.is_logged_in());

        cli.save_token("abc").unwrap();
        assert!(cli.is_logged_in());
        assert_eq!(UserConfig::load(&path).unwrap().token.as_deref(), Some("abc"));

        cli.forget_token().unwrap();
        assert!(!cli.is_logged_in());
        assert_eq!(UserConfig::load(&path).unwrap().token, None);
    }
}

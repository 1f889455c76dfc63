use std::io;
use std::path::Path;

use anyhow::Context as _;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::display::DisplayMode;

pub const APP_NAME: &str = "termoj";

/// User-level settings persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub display_mode: DisplayMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

impl UserConfig {
    pub const FILENAME: &str = "config.toml";

    /// Options that `config get` / `config set` understand.
    pub const KEYS: &'static [&'static str] = &["display_mode"];

    /// Commented default file written by `config init`.
    pub fn default_toml() -> String {
        Asset::get(Self::FILENAME)
            .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
            .unwrap_or_default()
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads the config file; a missing file yields the defaults.
    pub fn load(filepath: &Path) -> anyhow::Result<Self> {
        let toml = match std::fs::read_to_string(filepath) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| format!("Cannot read {:?}", filepath)),
        };
        Self::from_toml(&toml).with_context(|| format!("Invalid config TOML: {:?}", filepath))
    }

    pub fn save(&self, filepath: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_private(filepath, &toml)
    }

    /// Writes the commented default file unless one already exists.
    /// Returns whether a file was written.
    pub fn init_file(filepath: &Path) -> anyhow::Result<bool> {
        if filepath.exists() {
            return Ok(false);
        }
        write_private(filepath, &Self::default_toml())?;
        Ok(true)
    }

    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "display_mode" => Ok(self.display_mode.to_string()),
            _ => anyhow::bail!(
                "Unknown option '{}' (available: {})",
                key,
                Self::KEYS.join(", ")
            ),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "display_mode" => {
                self.display_mode = value.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid display mode: '{}'. Must be one of: {}",
                        value,
                        DisplayMode::names().join(", ")
                    )
                })?;
                Ok(())
            }
            _ => anyhow::bail!(
                "Unknown option '{}' (available: {})",
                key,
                Self::KEYS.join(", ")
            ),
        }
    }
}

/// The file holds a bearer token, so it is kept owner-readable only where that is expressible.
fn write_private(filepath: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(dir) = filepath.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("Cannot create dir {:?}", dir))?;
    }
    std::fs::write(filepath, contents).with_context(|| format!("Cannot write {:?}", filepath))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        let perm = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(filepath, perm)
            .with_context(|| format!("Cannot set permissions of {:?}", filepath))?;
    }
    Ok(())
}

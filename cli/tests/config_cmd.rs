use std::path::Path;

use clap::Parser as _;
use termoj_cli::cmd::GlobalArgs;
use termoj_core::{DisplayMode, UserConfig};

async fn run(dir: &Path, argv: &[&str]) -> anyhow::Result<()> {
    let dir = dir.to_str().unwrap();
    let mut full = vec!["termoj", "--config-dir", dir];
    full.extend_from_slice(argv);
    GlobalArgs::try_parse_from(full).unwrap().exec_subcmd().await
}

fn load(dir: &Path) -> UserConfig {
    UserConfig::load(&dir.join(UserConfig::FILENAME)).unwrap()
}

#[tokio::test]
async fn set_and_get_display_mode() {
    let dir = tempfile::tempdir().unwrap();

    run(dir.path(), &["config", "set", "display_mode", "plain"])
        .await
        .unwrap();
    assert_eq!(load(dir.path()).display_mode, DisplayMode::Plain);

    run(dir.path(), &["config", "get", "display_mode"]).await.unwrap();
    run(dir.path(), &["config", "view"]).await.unwrap();
}

#[tokio::test]
async fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let err = run(dir.path(), &["config", "set", "display_mode", "fancy"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid display mode"));

    assert!(run(dir.path(), &["config", "set", "colour", "on"]).await.is_err());
    assert!(!dir.path().join(UserConfig::FILENAME).exists());
}

#[tokio::test]
async fn reset_clears_token() {
    let dir = tempfile::tempdir().unwrap();
    UserConfig {
        display_mode: DisplayMode::Cartoon,
        token: Some("stale-token".to_owned()),
    }
    .save(&dir.path().join(UserConfig::FILENAME))
    .unwrap();

    run(dir.path(), &["config", "reset", "--yes"]).await.unwrap();

    let cfg = load(dir.path());
    assert_eq!(cfg.display_mode, DisplayMode::Rich);
    assert_eq!(cfg.token, None);
}

#[tokio::test]
async fn init_writes_commented_default_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(UserConfig::FILENAME);

    run(dir.path(), &["config", "init"]).await.unwrap();
    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("display_mode"));

    std::fs::write(&path, "display_mode = \"plain\"\n").unwrap();
    run(dir.path(), &["config", "init"]).await.unwrap();
    assert_eq!(load(dir.path()).display_mode, DisplayMode::Plain);
}

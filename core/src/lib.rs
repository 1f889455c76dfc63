pub mod action;
pub mod client;
pub mod config;
pub mod display;
pub mod interactive;
pub mod style;
pub mod watch;

pub use crate::client::PersistentClient;
pub use crate::config::UserConfig;
pub use crate::display::{presenter, DisplayMode, Presenter, Tone};

pub mod cmd;
pub mod config;
pub mod util;
pub mod view;

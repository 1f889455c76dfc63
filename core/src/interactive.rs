use std::borrow::Cow;
use std::io;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub mod util {
    use dialoguer::{theme::ColorfulTheme, Confirm, Input};
    use std::io;

    fn theme() -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn ask_text(prompt: &str, allow_empty: bool) -> io::Result<String> {
        Input::with_theme(&theme())
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
    }

    pub fn confirm(prompt: &str, default: bool) -> io::Result<bool> {
        Confirm::with_theme(&theme())
            .with_prompt(prompt)
            .default(default)
            .interact()
    }
}

/// Asks whether to fetch another page. Empty input continues, `q` stops.
pub fn ask_next_page() -> io::Result<bool> {
    let answer = util::ask_text("Press [Enter] for the next page, or 'q' to quit", true)?;
    Ok(wants_next_page(&answer))
}

fn wants_next_page(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("q")
}

pub fn new_spinner(msg: impl Into<Cow<'static, str>>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(msg);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

use colored::{Color, ColoredString, Colorize};
use crossterm::terminal;
use termoj_webclient::SubmissionStatus;

use crate::display::Tone;

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false;
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

/// Width of the attached terminal, 80 when stdout is not a terminal.
pub fn terminal_cols() -> usize {
    terminal::size().map(|(cols, _)| cols as usize).unwrap_or(80)
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for Tone {
    fn color(&self) -> Color {
        match self {
            Tone::Plain => Color::White,
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Blue,
        }
    }
}

impl ColorTheme for SubmissionStatus {
    fn color(&self) -> Color {
        use SubmissionStatus::*;
        let truecolor = is_truecolor_supported();
        match self {
            Accepted if truecolor => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Accepted => Color::Green,
            WrongAnswer if truecolor => Color::TrueColor {
                r: 210,
                g: 138,
                b: 4,
            },
            WrongAnswer => Color::Yellow,
            TimeLimitExceeded | MemoryLimitExceeded | DiskLimitExceeded | MemoryLeak
                if truecolor =>
            {
                Color::TrueColor {
                    r: 220,
                    g: 42,
                    b: 42,
                }
            }
            TimeLimitExceeded | MemoryLimitExceeded | DiskLimitExceeded | MemoryLeak => Color::Red,
            RuntimeError if truecolor => Color::TrueColor {
                r: 171,
                g: 40,
                b: 200,
            },
            RuntimeError => Color::Magenta,
            CompileError => Color::Blue,
            Pending | Compiling | Judging => Color::Cyan,
            SystemError | BadProblem | UnknownError => Color::BrightRed,
            Void | Aborted | Skipped => Color::BrightBlack,
        }
    }
}

/// Inverted label, e.g. ` Wrong Answer ` on an amber background.
pub fn status_badge(status: SubmissionStatus) -> ColoredString {
    let fg = if is_truecolor_supported() {
        Color::TrueColor {
            r: 255,
            g: 255,
            b: 255,
        }
    } else {
        Color::BrightWhite
    };
    format!(" {} ", status.label())
        .on_color(status.color())
        .bold()
        .color(fg)
}

pub fn status_emoji(status: SubmissionStatus) -> &'static str {
    use SubmissionStatus::*;
    match status {
        Accepted => "✅",
        WrongAnswer => "❌",
        CompileError => "🔧",
        RuntimeError => "💣",
        TimeLimitExceeded => "⏰",
        MemoryLimitExceeded | MemoryLeak => "🧠",
        DiskLimitExceeded => "💾",
        Pending | Compiling | Judging => "⏳",
        Void | Aborted | Skipped => "🚫",
        SystemError | BadProblem | UnknownError => "💥",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_status_has_an_emoji_and_label() {
        for status in SubmissionStatus::iter() {
            assert!(!status_emoji(status).is_empty());
            assert!(status_badge(status).contains(&status.label()));
        }
    }

    #[test]
    fn in_progress_statuses_share_a_color() {
        assert_eq!(SubmissionStatus::Pending.color(), SubmissionStatus::Judging.color());
        assert_ne!(SubmissionStatus::Pending.color(), SubmissionStatus::Aborted.color());
    }
}

//! Pluggable presentation strategies: every command renders through a [`Presenter`].

use colored::Colorize;
use console::Alignment;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use termoj_webclient::SubmissionStatus;

use crate::style::{self, ColorTheme};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    Plain,
    #[default]
    Rich,
    Cartoon,
}

impl DisplayMode {
    pub fn names() -> Vec<String> {
        Self::iter().map(|m| m.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Success,
    Error,
    Warning,
    Info,
}

pub trait Presenter {
    fn mode(&self) -> DisplayMode;

    fn render_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String;

    fn render_message(&self, msg: &str, tone: Tone) -> String;

    fn render_section(&self, title: &str, body: &str) -> String;

    fn render_status(&self, status: SubmissionStatus) -> String;

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        print!("{}", self.render_table(headers, rows));
    }

    fn message(&self, msg: &str, tone: Tone) {
        match tone {
            Tone::Error | Tone::Warning => eprintln!("{}", self.render_message(msg, tone)),
            _ => println!("{}", self.render_message(msg, tone)),
        }
    }

    fn section(&self, title: &str, body: &str) {
        print!("{}", self.render_section(title, body));
    }

    fn plain(&self, msg: &str) {
        self.message(msg, Tone::Plain)
    }

    fn success(&self, msg: &str) {
        self.message(msg, Tone::Success)
    }

    fn info(&self, msg: &str) {
        self.message(msg, Tone::Info)
    }

    fn warn(&self, msg: &str) {
        self.message(msg, Tone::Warning)
    }

    fn error(&self, msg: &str) {
        self.message(msg, Tone::Error)
    }
}

pub fn presenter(mode: DisplayMode) -> Box<dyn Presenter> {
    use DisplayMode::*;
    match mode {
        Plain => Box::new(PlainPresenter),
        Rich => Box::new(RichPresenter::new()),
        Cartoon => Box::new(CartoonPresenter::new()),
    }
}

//-------------------------------------------------------------------------
// plain

pub struct PlainPresenter;

impl Presenter for PlainPresenter {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Plain
    }

    fn render_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let rows = normalize_rows(headers.len(), rows);
        let widths = column_widths(headers, &rows);

        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| pad_right(cell, w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_owned()
        };

        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let header = line(&header_cells);
        let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

        let mut out = format!("{}\n{}\n", header, "-".repeat(rule_len));
        for row in &rows {
            out.push_str(&line(row));
            out.push('\n');
        }
        out
    }

    fn render_message(&self, msg: &str, _tone: Tone) -> String {
        msg.to_owned()
    }

    fn render_section(&self, title: &str, body: &str) -> String {
        format!("[{}]\n{}\n\n", title, body.trim_end())
    }

    fn render_status(&self, status: SubmissionStatus) -> String {
        status.to_string()
    }
}

//-------------------------------------------------------------------------
// rich & cartoon

struct BoxStyle {
    border: colored::Color,
    header: colored::Color,
    header_prefix: &'static str,
    cell_prefix: &'static str,
}

pub struct RichPresenter {
    max_width: usize,
}

impl RichPresenter {
    pub fn new() -> Self {
        Self {
            max_width: style::terminal_cols(),
        }
    }

    pub fn with_max_width(max_width: usize) -> Self {
        Self { max_width }
    }

    const STYLE: BoxStyle = BoxStyle {
        border: colored::Color::BrightBlack,
        header: colored::Color::BrightWhite,
        header_prefix: "",
        cell_prefix: "",
    };
}

impl Default for RichPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for RichPresenter {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Rich
    }

    fn render_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        render_boxed(headers, rows, &Self::STYLE, self.max_width)
    }

    fn render_message(&self, msg: &str, tone: Tone) -> String {
        match tone {
            Tone::Plain => msg.to_owned(),
            _ => msg.color(tone.color()).to_string(),
        }
    }

    fn render_section(&self, title: &str, body: &str) -> String {
        let title_width = display_width(title) + 2;
        let rule = "─".repeat(self.max_width.saturating_sub(title_width).max(3));
        format!(
            "{} {}\n{}\n\n",
            title.bold().cyan(),
            rule.bright_black(),
            body.trim_end()
        )
    }

    fn render_status(&self, status: SubmissionStatus) -> String {
        style::status_badge(status).to_string()
    }
}

pub struct CartoonPresenter {
    max_width: usize,
}

impl CartoonPresenter {
    pub fn new() -> Self {
        Self {
            max_width: style::terminal_cols(),
        }
    }

    pub fn with_max_width(max_width: usize) -> Self {
        Self { max_width }
    }

    const STYLE: BoxStyle = BoxStyle {
        border: colored::Color::Magenta,
        header: colored::Color::Cyan,
        header_prefix: "🎯 ",
        cell_prefix: "✨ ",
    };

    fn emoji(tone: Tone) -> &'static str {
        match tone {
            Tone::Success => "✨",
            Tone::Error => "💥",
            Tone::Warning => "⚠️",
            Tone::Info | Tone::Plain => "💡",
        }
    }
}

impl Default for CartoonPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for CartoonPresenter {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Cartoon
    }

    fn render_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        render_boxed(headers, rows, &Self::STYLE, self.max_width)
    }

    fn render_message(&self, msg: &str, tone: Tone) -> String {
        format!("{} {}", Self::emoji(tone), msg)
    }

    fn render_section(&self, title: &str, body: &str) -> String {
        format!(
            "📖 {}\n{}\n\n",
            title.bold().magenta(),
            body.trim_end()
        )
    }

    fn render_status(&self, status: SubmissionStatus) -> String {
        format!("{} {}", style::status_emoji(status), status.label())
    }
}

fn render_boxed(headers: &[&str], rows: &[Vec<String>], st: &BoxStyle, max_width: usize) -> String {
    let headers: Vec<String> = headers
        .iter()
        .map(|h| format!("{}{}", st.header_prefix, h))
        .collect();
    let rows: Vec<Vec<String>> = normalize_rows(headers.len(), rows)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| format!("{}{}", st.cell_prefix, cell))
                .collect()
        })
        .collect();

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut widths = column_widths(&header_refs, &rows);
    // "│ " + cells joined by " │ " + " │"
    let frame = 4 + 3 * widths.len().saturating_sub(1);
    fit_widths(&mut widths, max_width.saturating_sub(frame));

    let rule = |left: &str, mid: &str, right: &str| {
        let inner = widths
            .iter()
            .map(|&w| "─".repeat(w + 2))
            .collect::<Vec<_>>()
            .join(mid);
        format!("{}{}{}", left, inner, right)
            .color(st.border)
            .to_string()
    };
    let bar = "│".color(st.border).to_string();
    let sep = format!(" {} ", bar);
    let line = |cells: &[String], header: bool| {
        let inner = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| {
                let cell = pad_right(&truncate_to_width(cell, w), w);
                if header {
                    cell.color(st.header).bold().to_string()
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(sep.as_str());
        format!("{} {} {}", bar, inner, bar)
    };

    let mut out = String::new();
    out.push_str(&rule("┌", "┬", "┐"));
    out.push('\n');
    out.push_str(&line(&headers, true));
    out.push('\n');
    out.push_str(&rule("├", "┼", "┤"));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row, false));
        out.push('\n');
    }
    out.push_str(&rule("└", "┴", "┘"));
    out.push('\n');
    out
}

//-------------------------------------------------------------------------
// width helpers

/// Pads/cuts every row to `ncols` cells and flattens embedded newlines.
fn normalize_rows(ncols: usize, rows: &[Vec<String>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            (0..ncols)
                .map(|i| {
                    row.get(i)
                        .map(|cell| cell.split_whitespace().collect::<Vec<_>>().join(" "))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(h)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Shrinks the widest columns until the sum fits `budget` (each keeps at least 6 cols).
fn fit_widths(widths: &mut [usize], budget: usize) {
    const MIN_COL: usize = 6;
    while widths.iter().sum::<usize>() > budget {
        let Some((idx, &w)) = widths.iter().enumerate().max_by_key(|&(_, w)| *w) else {
            return;
        };
        if w <= MIN_COL {
            return;
        }
        widths[idx] = w - 1;
    }
}

fn pad_right(s: &str, width: usize) -> String {
    console::pad_str(s, width, Alignment::Left, None).into_owned()
}

fn truncate_to_width(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_owned();
    }
    let plain = console::strip_ansi_codes(s);
    console::truncate_str(&plain, width, "…").into_owned()
}

/// Terminal columns taken by `s`, ignoring ANSI color sequences.
pub fn display_width(s: &str) -> usize {
    console::measure_text_width(s)
}

#[cfg(test)]
mod test {
    use super::*;

    fn plain_text(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn plain_table_layout() {
        let table = PlainPresenter.render_table(
            &["ID", "Name"],
            &rows(&[&["1", "Data Structures"], &["42", "OS"]]),
        );
        let expected = "\
ID | Name
--------------------
1  | Data Structures
42 | OS
";
        assert_eq!(table, expected);
    }

    #[test]
    fn plain_table_pads_missing_cells_and_flattens_newlines() {
        let table =
            PlainPresenter.render_table(&["A", "B"], &rows(&[&["x"], &["line1\nline2", "y"]]));
        assert_eq!(table, "A           | B\n---------------\nx\nline1 line2 | y\n");
    }

    #[test]
    fn plain_message_ignores_tone() {
        assert_eq!(PlainPresenter.render_message("done", Tone::Success), "done");
        assert_eq!(
            PlainPresenter.render_status(SubmissionStatus::WrongAnswer),
            "wrong_answer"
        );
    }

    #[test]
    fn rich_table_is_boxed() {
        let table = RichPresenter::with_max_width(80)
            .render_table(&["ID", "Name"], &rows(&[&["1", "Algorithms"]]));
        let lines: Vec<String> = table.lines().map(plain_text).collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "┌────┬────────────┐");
        assert_eq!(lines[1], "│ ID │ Name       │");
        assert_eq!(lines[3], "│ 1  │ Algorithms │");
        assert_eq!(lines[4], "└────┴────────────┘");
    }

    #[test]
    fn rich_table_truncates_to_width() {
        let long = "x".repeat(100);
        let table = RichPresenter::with_max_width(40)
            .render_table(&["ID", "Description"], &rows(&[&["1", &long]]));
        for line in table.lines() {
            assert!(display_width(line) <= 40, "too wide: {}", plain_text(line));
        }
        assert!(plain_text(&table).contains('…'));
    }

    #[test]
    fn cartoon_decorations() {
        let p = CartoonPresenter::with_max_width(80);
        let table = plain_text(&p.render_table(&["ID"], &rows(&[&["7"]])));
        assert!(table.contains("🎯 ID"));
        assert!(table.contains("✨ 7"));

        assert_eq!(p.render_message("boom", Tone::Error), "💥 boom");
        assert_eq!(p.render_message("hello", Tone::Plain), "💡 hello");
    }

    #[test]
    fn width_of_wide_and_colored_text() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("数据结构"), 8);
        assert_eq!(display_width("\u{1b}[1;32mOK\u{1b}[0m"), 2);
        assert_eq!(truncate_to_width("数据结构", 5), "数据…");
    }

    #[test]
    fn narrow_symbols_take_one_column() {
        assert_eq!(display_width("✓"), 1);
        assert_eq!(display_width("★"), 1);
        assert_eq!(display_width("🎯"), 2);

        let table = RichPresenter::with_max_width(80)
            .render_table(&["Done"], &rows(&[&["✓"], &["ok"]]));
        let lines: Vec<String> = table.lines().map(plain_text).collect();
        assert_eq!(lines[3], "│ ✓    │");
        assert_eq!(lines[4], "│ ok   │");
    }

    #[test]
    fn display_mode_names() {
        assert_eq!(DisplayMode::names(), ["plain", "rich", "cartoon"]);
        assert_eq!("cartoon".parse::<DisplayMode>(), Ok(DisplayMode::Cartoon));
        assert!("fancy".parse::<DisplayMode>().is_err());
        assert_eq!(presenter(DisplayMode::Plain).mode(), DisplayMode::Plain);
    }
}

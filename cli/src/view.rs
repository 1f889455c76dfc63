//! Turns API records into presenter tables.

use chrono::{Local, TimeZone};
use termoj_core::Presenter;
use termoj_webclient::{
    bytes_to_mib, Course, Problem, ProblemBrief, Problemset, Submission, SubmissionBrief,
    UtcDateTime,
};

pub const NONE: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(cells.into_iter().map(|c| c.to_string()).collect());
    }

    pub fn show(&self, out: &dyn Presenter) {
        out.table(&self.headers, &self.rows);
    }
}

pub fn fmt_time(t: &UtcDateTime) -> String {
    fmt_time_in(t, &Local)
}

pub fn fmt_time_in<Tz: TimeZone>(t: &UtcDateTime, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

fn or_none(s: Option<&str>) -> String {
    s.filter(|s| !s.trim().is_empty())
        .unwrap_or(NONE)
        .to_owned()
}

//-------------------------------------------------------------------------
// course

pub fn courses(list: &[Course]) -> Table {
    let mut t = Table::new(&["ID", "Name", "Term", "Tag", "Description"]);
    for c in list {
        t.row([
            c.id.to_string(),
            c.name.clone(),
            or_none(c.term.get().map(|x| x.name.as_str())),
            or_none(c.tag.get().map(|x| x.name.as_str())),
            or_none(c.description.non_blank()),
        ]);
    }
    t
}

pub fn course_detail(c: &Course) -> Table {
    let mut t = Table::new(&["Field", "Value"]);
    t.row(["ID".to_owned(), c.id.to_string()]);
    t.row(["Name", c.name.as_str()]);
    t.row([
        "Description".to_owned(),
        c.description
            .non_blank()
            .unwrap_or("No description provided")
            .to_owned(),
    ]);
    let term = match c.term.get() {
        Some(term) => format!(
            "{} ({} - {})",
            term.name,
            fmt_time(&term.start_time),
            fmt_time(&term.end_time)
        ),
        None => "No term information".to_owned(),
    };
    t.row(["Term".to_owned(), term]);
    t.row([
        "Tag",
        c.tag.get().map_or("No tag available", |tag| tag.name.as_str()),
    ]);
    t
}

//-------------------------------------------------------------------------
// problemset

pub fn problemsets(list: &[Problemset]) -> Table {
    let mut t = Table::new(&["ID", "Name", "Type", "Start Time", "End Time"]);
    for ps in list {
        t.row([
            ps.id.to_string(),
            ps.name.clone(),
            ps.kind.to_string(),
            fmt_time(&ps.start_time),
            fmt_time(&ps.end_time),
        ]);
    }
    t
}

/// Problemsets of a course, with the late deadline and description columns.
pub fn course_problemsets(list: &[Problemset]) -> Table {
    let mut t = Table::new(&[
        "ID",
        "Name",
        "Type",
        "Start Time",
        "End Time",
        "Late Deadline",
        "Description",
    ]);
    for ps in list {
        t.row([
            ps.id.to_string(),
            ps.name.clone(),
            ps.kind.to_string(),
            fmt_time(&ps.start_time),
            fmt_time(&ps.end_time),
            ps.late_submission_deadline
                .get()
                .map_or_else(|| NONE.to_owned(), fmt_time),
            or_none(ps.description.non_blank()),
        ]);
    }
    t
}

pub fn problemset_detail(ps: &Problemset) -> Table {
    let mut t = Table::new(&["Property", "Value"]);
    t.row(["ID".to_owned(), ps.id.to_string()]);
    t.row(["Name", ps.name.as_str()]);
    if let Some(course) = &ps.course {
        let name = course.name.as_deref().unwrap_or(NONE);
        t.row(["Course".to_owned(), format!("{} (ID: {})", name, course.id)]);
    }
    t.row(["Description".to_owned(), or_none(ps.description.non_blank())]);
    t.row(["Type".to_owned(), ps.kind.to_string()]);
    t.row(["Start Time".to_owned(), fmt_time(&ps.start_time)]);
    t.row(["End Time".to_owned(), fmt_time(&ps.end_time)]);
    t.row([
        "Late Submission".to_owned(),
        ps.late_submission_deadline
            .get()
            .map_or_else(|| "Not Allowed".to_owned(), fmt_time),
    ]);
    let langs = if ps.allowed_languages.is_empty() {
        "All".to_owned()
    } else {
        join(&ps.allowed_languages)
    };
    t.row(["Allowed Languages".to_owned(), langs]);
    t
}

//-------------------------------------------------------------------------
// problem

pub fn problems(list: &[ProblemBrief]) -> Table {
    let mut t = Table::new(&["ID", "Title"]);
    for p in list {
        t.row([p.id.to_string(), or_none(p.title.as_deref())]);
    }
    t
}

/// Titled text blocks of a problem statement, in display order.
pub fn problem_sections(p: &Problem) -> Vec<(String, String)> {
    let text = |f: Option<&str>, fallback: &str| f.unwrap_or(fallback).to_owned();

    let mut sections = vec![
        (
            "Description".to_owned(),
            text(p.description.non_blank(), "No description provided."),
        ),
        (
            "Input Format".to_owned(),
            text(p.input.non_blank(), "No input format provided."),
        ),
        (
            "Output Format".to_owned(),
            text(p.output.non_blank(), "No output format provided."),
        ),
        (
            "Constraints".to_owned(),
            text(p.data_range.non_blank(), "No constraints provided."),
        ),
        (
            "Accepted Languages".to_owned(),
            if p.languages_accepted.is_empty() {
                "No languages specified.".to_owned()
            } else {
                join(&p.languages_accepted)
            },
        ),
    ];

    for (i, ex) in p.all_examples().into_iter().enumerate() {
        let n = i + 1;
        let name = ex
            .name
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| format!("Example {}", n), |s| format!("Example {}: {}", n, s));
        sections.push((
            format!("{} - Input", name),
            ex.input.unwrap_or_else(|| "No Input Provided".to_owned()),
        ));
        sections.push((
            format!("{} - Output", name),
            ex.output.unwrap_or_else(|| "No Output Provided".to_owned()),
        ));
        if let Some(desc) = ex.description.filter(|s| !s.trim().is_empty()) {
            sections.push((format!("{} - Explanation", name), desc));
        }
    }
    sections
}

//-------------------------------------------------------------------------
// submission

pub fn submissions(list: &[SubmissionBrief], out: &dyn Presenter) -> Table {
    let mut t = Table::new(&[
        "ID",
        "Problem ID",
        "Problem Title",
        "Language",
        "Status",
        "Created At",
    ]);
    for s in list {
        let problem = s.problem.as_ref();
        t.row([
            s.id.to_string(),
            problem.map_or_else(|| NONE.to_owned(), |p| p.id.to_string()),
            or_none(problem.and_then(|p| p.title.as_deref())),
            s.language.to_string(),
            out.render_status(s.status),
            s.created_at.as_ref().map_or_else(|| NONE.to_owned(), fmt_time),
        ]);
    }
    t
}

pub fn submission_detail(s: &Submission, out: &dyn Presenter) -> Table {
    let mut t = Table::new(&["Attribute", "Value"]);
    t.row(["ID".to_owned(), s.id.to_string()]);
    if let Some(problem) = &s.problem {
        let title = problem.title.as_deref().unwrap_or(NONE);
        t.row(["Problem".to_owned(), format!("{} ({})", problem.id, title)]);
    }
    t.row([
        "Status".to_owned(),
        s.status
            .map_or_else(|| "N/A".to_owned(), |st| out.render_status(st)),
    ]);
    if let Some(lang) = s.language {
        t.row(["Language".to_owned(), lang.to_string()]);
    }
    if let Some(score) = s.visible_score() {
        t.row(["Score".to_owned(), score.to_string()]);
    }
    if let Some(ms) = s.time_msecs.get() {
        t.row(["Time".to_owned(), format!("{} ms", ms)]);
    }
    if let Some(mib) = s.memory_mib() {
        t.row(["Memory".to_owned(), format!("{:.2} MB", mib)]);
    }
    if let Some(msg) = s.message.non_blank() {
        t.row(["Message", msg]);
    }
    if let Some(at) = &s.created_at {
        t.row(["Created At".to_owned(), fmt_time(at)]);
    }

    for (i, test) in s.testcases().iter().enumerate() {
        let n = i + 1;
        t.row([
            format!("Test {} Status", n),
            test.status.clone().unwrap_or_else(|| "Unknown".to_owned()),
        ]);
        if let Some(ms) = test.time_msecs {
            t.row([format!("Test {} Time", n), format!("{} ms", ms)]);
        }
        if let Some(bytes) = test.memory_bytes {
            t.row([
                format!("Test {} Memory", n),
                format!("{:.2} MB", bytes_to_mib(bytes)),
            ]);
        }
        if let Some(msg) = test.message.as_deref().filter(|m| !m.is_empty()) {
            t.row([format!("Test {} Message", n), msg.to_owned()]);
        }
    }
    t
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

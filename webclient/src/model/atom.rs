use serde::{Deserialize, Serialize};

pub type CourseId = u64;
pub type ProblemId = u64;
pub type ProblemsetId = u64;
pub type SubmissionId = u64;

pub type UtcDateTime = chrono::DateTime<chrono::Utc>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Language {
    Cpp,
    Python,
    Java,
    Git,
    Verilog,
    Quiz,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProblemsetType {
    Homework,
    Exam,
    Contest,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    CompileError,
    RuntimeError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    DiskLimitExceeded,
    MemoryLeak,
    Pending,
    Compiling,
    Judging,
    Void,
    Aborted,
    Skipped,
    SystemError,
    BadProblem,
    UnknownError,
}

impl SubmissionStatus {
    /// Statuses after which the judge will not touch a submission again.
    pub const TERMINAL: &'static [SubmissionStatus] = &[
        SubmissionStatus::Accepted,
        SubmissionStatus::WrongAnswer,
        SubmissionStatus::CompileError,
        SubmissionStatus::RuntimeError,
        SubmissionStatus::TimeLimitExceeded,
        SubmissionStatus::MemoryLimitExceeded,
        SubmissionStatus::DiskLimitExceeded,
        SubmissionStatus::MemoryLeak,
        SubmissionStatus::Void,
        SubmissionStatus::Aborted,
        SubmissionStatus::Skipped,
        SubmissionStatus::SystemError,
        SubmissionStatus::BadProblem,
        SubmissionStatus::UnknownError,
    ];

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }

    pub const fn is_accepted(self) -> bool {
        matches!(self, SubmissionStatus::Accepted)
    }

    /// Human readable label, e.g. "Wrong Answer".
    pub fn label(self) -> String {
        self.as_ref()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::TimeLimitExceeded).unwrap(),
            r#""time_limit_exceeded""#
        );
        assert_eq!(Language::Cpp.to_string(), "cpp");
        assert_eq!(ProblemsetType::from_str("homework"), Ok(ProblemsetType::Homework));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(serde_json::from_str::<Language>(r#""rust""#).is_err());
        assert!(serde_json::from_str::<SubmissionStatus>(r#""ACCEPTED""#).is_err());
        assert!(serde_json::from_str::<ProblemsetType>(r#""quiz""#).is_err());
        assert!(Language::from_str("brainfuck").is_err());
    }

    #[test]
    fn terminal_statuses() {
        let in_progress: Vec<_> = SubmissionStatus::iter()
            .filter(|s| !s.is_terminal())
            .collect();
        use SubmissionStatus::*;
        assert_eq!(in_progress, vec![Pending, Compiling, Judging]);
    }

    #[test]
    fn status_label() {
        assert_eq!(SubmissionStatus::WrongAnswer.label(), "Wrong Answer");
        assert_eq!(SubmissionStatus::Accepted.label(), "Accepted");
        assert_eq!(
            SubmissionStatus::MemoryLimitExceeded.label(),
            "Memory Limit Exceeded"
        );
    }
}

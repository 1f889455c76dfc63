use serde::{Deserialize, Serialize};

use super::atom::*;
use super::course::CourseRef;
use super::field::Field;
use super::problem::ProblemBrief;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problemset {
    pub id: ProblemsetId,

    #[serde(default)]
    pub course: Option<CourseRef>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,

    #[serde(rename = "type")]
    pub kind: ProblemsetType,

    pub start_time: UtcDateTime,
    pub end_time: UtcDateTime,

    /// `Null` means late submission is not allowed.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub late_submission_deadline: Field<UtcDateTime>,

    /// Empty means every language is allowed.
    #[serde(default)]
    pub allowed_languages: Vec<Language>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub problems: Field<Vec<ProblemBrief>>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub join_url: Option<String>,

    #[serde(default)]
    pub quit_url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,
}

impl Problemset {
    pub fn allows(&self, lang: Language) -> bool {
        self.allowed_languages.is_empty() || self.allowed_languages.contains(&lang)
    }

    pub fn is_open_at(&self, now: UtcDateTime) -> bool {
        let deadline = self
            .late_submission_deadline
            .get()
            .copied()
            .unwrap_or(self.end_time)
            .max(self.end_time);
        self.start_time <= now && now <= deadline
    }
}

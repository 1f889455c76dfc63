use serde::{Deserialize, Serialize};

use super::atom::*;
use super::field::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    pub start_time: UtcDateTime,
    pub end_time: UtcDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tag: Field<Tag>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub term: Field<Term>,

    #[serde(default)]
    pub url: Option<String>,

    /// Only present while the current user may join.
    #[serde(default)]
    pub join_url: Option<String>,

    /// Only present while the current user may quit.
    #[serde(default)]
    pub quit_url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,
}

impl Course {
    pub fn can_join(&self) -> bool {
        self.join_url.is_some()
    }

    pub fn can_quit(&self) -> bool {
        self.quit_url.is_some()
    }
}

/// Course reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub id: CourseId,

    #[serde(default)]
    pub name: Option<String>,
}

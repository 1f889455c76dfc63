use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::atom::*;
use super::field::Field;
use super::problem::ProblemBrief;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionBrief {
    pub id: SubmissionId,

    #[serde(default)]
    pub friendly_name: Option<String>,

    #[serde(default)]
    pub problem: Option<ProblemBrief>,

    pub status: SubmissionStatus,
    pub language: Language,

    #[serde(default)]
    pub created_at: Option<UtcDateTime>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,
}

/// Full submission record.
///
/// The response of `POST /problem/{id}/submit` may carry nothing but `id`,
/// so `status` and `language` are optional here, unlike in [`SubmissionBrief`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,

    #[serde(default)]
    pub friendly_name: Option<String>,

    #[serde(default)]
    pub problem: Option<ProblemBrief>,

    #[serde(default)]
    pub public: Option<bool>,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub score: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub message: Field<String>,

    /// Free-form judge breakdown, usually `{"tests": [...]}`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub details: Field<Value>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub time_msecs: Field<u64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub memory_bytes: Field<u64>,

    #[serde(default)]
    pub status: Option<SubmissionStatus>,

    #[serde(default)]
    pub should_show_score: Option<bool>,

    #[serde(default)]
    pub created_at: Option<UtcDateTime>,

    #[serde(default)]
    pub code_url: Option<String>,

    #[serde(default)]
    pub abort_url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,
}

/// One row of the per-test breakdown in [`Submission::details`].
#[derive(Debug, Clone, PartialEq)]
pub struct TestcaseOutcome {
    pub status: Option<String>,
    pub time_msecs: Option<f64>,
    pub memory_bytes: Option<u64>,
    pub message: Option<String>,
}

impl Submission {
    pub fn is_finished(&self) -> bool {
        self.status.map_or(false, SubmissionStatus::is_terminal)
    }

    pub fn can_abort(&self) -> bool {
        self.abort_url.is_some()
    }

    /// Score, but only when the judge wants it shown.
    pub fn visible_score(&self) -> Option<i64> {
        match self.should_show_score {
            Some(false) => None,
            _ => self.score.get().copied(),
        }
    }

    pub fn memory_mib(&self) -> Option<f64> {
        self.memory_bytes.get().map(|&b| bytes_to_mib(b))
    }

    /// Reads the per-test breakdown out of `details`.
    ///
    /// The judge has used both `tests` and `testcases` as the list key, and both
    /// `time_msecs`/`memory_bytes` and `time` (seconds)/`memory` for the measurements.
    /// Entries that are not objects are skipped.
    pub fn testcases(&self) -> Vec<TestcaseOutcome> {
        let Some(details) = self.details.get() else {
            return Vec::new();
        };
        let list = details
            .get("tests")
            .or_else(|| details.get("testcases"))
            .and_then(Value::as_array);
        let Some(list) = list else {
            return Vec::new();
        };

        list.iter()
            .filter_map(Value::as_object)
            .map(|test| {
                let time_msecs = test
                    .get("time_msecs")
                    .and_then(Value::as_f64)
                    .or_else(|| test.get("time").and_then(Value::as_f64).map(|s| s * 1000.0));
                let memory_bytes = test
                    .get("memory_bytes")
                    .or_else(|| test.get("memory"))
                    .and_then(Value::as_u64);
                TestcaseOutcome {
                    status: test.get("status").and_then(Value::as_str).map(str::to_owned),
                    time_msecs,
                    memory_bytes,
                    message: test.get("message").and_then(Value::as_str).map(str::to_owned),
                }
            })
            .collect()
    }
}

pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

use serde::{Deserialize, Serialize};

use super::atom::*;
use super::field::Field;

/// Problem entry as it appears in listings and in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemBrief {
    pub id: ProblemId,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub submit_url: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub input: Option<String>,

    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub input: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub output: Field<String>,

    #[serde(default)]
    pub examples: Vec<Example>,

    #[serde(default)]
    pub example_input: Option<String>,

    #[serde(default)]
    pub example_output: Option<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub data_range: Field<String>,

    #[serde(default)]
    pub languages_accepted: Vec<Language>,

    #[serde(default)]
    pub allow_public_submissions: Option<bool>,
}

impl Problem {
    /// Examples, falling back to the legacy single `example_input`/`example_output` pair.
    pub fn all_examples(&self) -> Vec<Example> {
        if !self.examples.is_empty() {
            return self.examples.clone();
        }
        if self.example_input.is_none() && self.example_output.is_none() {
            return Vec::new();
        }
        vec![Example {
            name: None,
            input: self.example_input.clone(),
            output: self.example_output.clone(),
            description: None,
        }]
    }

    pub fn accepts(&self, lang: Language) -> bool {
        self.languages_accepted.is_empty() || self.languages_accepted.contains(&lang)
    }
}

use std::fmt::Display;

/// Insertion-ordered query parameters that never carry empty values.
///
/// Omitted filters (`None`) and values rendering as `""` are dropped,
/// so they never reach the wire as `key=` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.0.push((key.to_owned(), value));
        }
        self
    }

    pub fn push_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<QueryParams> for Vec<(String, String)> {
    fn from(params: QueryParams) -> Self {
        params.0
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional response field that remembers *why* it has no value.
///
/// * `Absent`: the key was not in the JSON object.
/// * `Null`: the key was present with `null`.
/// * `Present`: the key held a value that decoded as `T`.
///
/// A value that is present but does not decode as `T` fails the whole record,
/// so that case never reaches this type.
///
/// Struct fields of this type must be marked `#[serde(default)]`,
/// otherwise serde reports a missing key instead of producing `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Present(v) => Some(v),
            Field::Absent | Field::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            Field::Absent | Field::Null => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(v) => Field::Present(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(v) => Field::Present(f(v)),
        }
    }
}

impl Field<String> {
    /// Present and not blank.
    pub fn non_blank(&self) -> Option<&str> {
        self.get().map(String::as_str).filter(|s| !s.trim().is_empty())
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Present(v),
            None => Field::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Present(v) => serializer.serialize_some(v),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

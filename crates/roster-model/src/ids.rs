use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a roster record.
///
/// Ids are opaque: the string is kept exactly as received, including any
/// surrounding whitespace, and is never reassigned once a record exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_whitespace_as_received() {
        assert_eq!(RecordId::new(" 7").as_str(), " 7");
        assert_ne!(RecordId::new(" 7"), RecordId::new("7"));
    }

    #[test]
    fn empty_id_is_a_value_like_any_other() {
        let id = RecordId::from("");
        assert_eq!(id.as_str(), "");
        assert_eq!(String::from(id), "");
    }
}

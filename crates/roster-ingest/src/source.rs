//! Where the initial roster comes from.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::IngestError;

/// Endpoint serving the reference member list.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// A roster source: an HTTP(S) endpoint or a local JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    Url(String),
    File(PathBuf),
}

impl Default for RosterSource {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl FromStr for RosterSource {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IngestError::EmptySource);
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for RosterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_urls_and_paths() {
        assert_eq!(
            "HTTPS://example.com/members.json".parse::<RosterSource>().unwrap(),
            RosterSource::Url("HTTPS://example.com/members.json".to_string())
        );
        assert_eq!(
            " data/members.json ".parse::<RosterSource>().unwrap(),
            RosterSource::File(PathBuf::from("data/members.json"))
        );
        assert!(matches!(
            "  ".parse::<RosterSource>(),
            Err(IngestError::EmptySource)
        ));
    }
}

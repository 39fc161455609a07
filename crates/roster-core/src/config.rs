//! Store behaviour switches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happens to the active search when an edit is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPolicy {
    /// Committing an edit drops the query and shows the full roster again.
    #[default]
    ClearOnEdit,
    /// The stored query is re-applied to the edited roster.
    Reapply,
}

impl FilterPolicy {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ClearOnEdit => "clear-on-edit",
            Self::Reapply => "reapply",
        }
    }
}

impl fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! In-memory roster state core.
//!
//! The master record list is the only authoritative data. The search-filtered
//! view, the visible page and the selection are kept consistent with it by the
//! [`RosterStore`] reducer as each [`Action`] is applied.

pub mod config;
pub mod delete;
pub mod edit;
pub mod error;
pub mod event;
pub mod master;
pub mod message;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod store;

pub use config::FilterPolicy;
pub use edit::EditDrafts;
pub use error::PageOutOfRange;
pub use event::{IgnoreReason, RosterEvent};
pub use master::MasterList;
pub use message::Action;
pub use pagination::{PAGE_SIZE, PageRequest};
pub use search::filter_records;
pub use selection::SelectionSet;
pub use store::{PageView, RosterState, RosterStore, RowView, reduce};

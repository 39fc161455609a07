//! Initial roster loading.
//!
//! The roster is fetched exactly once per session, either from an HTTP
//! endpoint or from a local JSON file. Nothing is ever written back.

pub mod client;
pub mod error;
pub mod load;
pub mod source;

pub use client::{DEFAULT_TIMEOUT, RosterClient};
pub use error::{IngestError, Result};
pub use load::{LoadOptions, load_or_empty, load_records, parse_records};
pub use source::{DEFAULT_SOURCE_URL, RosterSource};

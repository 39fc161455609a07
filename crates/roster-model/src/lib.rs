//! Record types shared by the roster editor crates.

pub mod error;
pub mod ids;
pub mod record;

pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use record::{Record, RecordField};

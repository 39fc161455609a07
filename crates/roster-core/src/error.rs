use thiserror::Error;

/// A page request that does not land on an existing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {requested} is out of range (1..={total_pages})")]
pub struct PageOutOfRange {
    pub requested: usize,
    pub total_pages: usize,
}

//! Fixed-size page windows over the filtered view.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::PageOutOfRange;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` items, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Half-open index range of a 1-based page, clamped to `len`.
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The slice of `items` visible on `page`.
pub fn window<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}

/// Clamp a page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// A page-bar request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageRequest {
    First,
    Previous,
    Next,
    Last,
    Number(usize),
}

impl PageRequest {
    /// Resolve against the current page; out-of-range targets are rejected, not clamped.
    pub fn resolve(self, current: usize, total_pages: usize) -> Result<usize, PageOutOfRange> {
        let requested = match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => total_pages,
            Self::Number(page) => page,
        };
        if (1..=total_pages).contains(&requested) {
            Ok(requested)
        } else {
            Err(PageOutOfRange {
                requested,
                total_pages,
            })
        }
    }
}

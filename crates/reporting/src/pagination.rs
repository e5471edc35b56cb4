//! Stateless pagination — clamped page windows over any ordered sequence.
//!
//! Callers own their "current page" state and pass it in on every call;
//! nothing here remembers anything between calls.

use serde::{Deserialize, Serialize};
use viewboard_core::error::{ReportingError, ReportingResult};

/// Most page-number buttons shown at once.
pub const PAGE_WINDOW_WIDTH: usize = 5;

/// Which slice of an ordered list to display, and which page buttons to
/// render. Out-of-range page requests are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// The page the caller asked for, before clamping.
    pub requested_page: i64,
    /// The page actually served, in `[1, total_pages]`.
    pub effective_page: usize,
    pub total_pages: usize,
    /// First item index of the page (inclusive).
    pub start_index: usize,
    /// One past the last item index of the page.
    pub end_index: usize,
    /// At most [`PAGE_WINDOW_WIDTH`] consecutive page numbers centered on
    /// `effective_page`, pinned to the `[1, total_pages]` boundaries.
    pub visible_pages: Vec<usize>,
}

/// Compute the page window for `requested_page` over `total_items` items.
///
/// `page_size == 0` is a caller bug and fails fast; a `requested_page`
/// below 1 or past the end is clamped. An empty list still has one page
/// (empty slice, `[1]` as the visible page set).
pub fn paginate(
    total_items: usize,
    page_size: usize,
    requested_page: i64,
) -> ReportingResult<PageWindow> {
    if page_size == 0 {
        return Err(ReportingError::InvalidPageSize { given: page_size });
    }

    let total_pages = total_items.div_ceil(page_size).max(1);
    let effective_page = requested_page.clamp(1, total_pages as i64) as usize;

    let start_index = (effective_page - 1) * page_size;
    let end_index = (start_index + page_size).min(total_items);

    let mut window_start = effective_page.saturating_sub(2).max(1);
    let window_end = (window_start + PAGE_WINDOW_WIDTH - 1).min(total_pages);
    if window_end - window_start + 1 < PAGE_WINDOW_WIDTH && window_start > 1 {
        window_start = window_end.saturating_sub(PAGE_WINDOW_WIDTH - 1).max(1);
    }

    Ok(PageWindow {
        requested_page,
        effective_page,
        total_pages,
        start_index,
        end_index,
        visible_pages: (window_start..=window_end).collect(),
    })
}

/// Apply a window to the slice it was computed for.
///
/// Bounds are re-clamped against the slice length, so a window computed
/// against a stale length degrades to a shorter page instead of panicking.
pub fn page_slice<'a, T>(items: &'a [T], window: &PageWindow) -> &'a [T] {
    let end = window.end_index.min(items.len());
    let start = window.start_index.min(end);
    &items[start..end]
}

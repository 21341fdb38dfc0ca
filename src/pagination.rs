//! Pagination windowing.
//!
//! Computes the contiguous slice of page numbers a pagination control
//! should display, keeping the current page centered where the
//! boundaries allow, and tracks the current page with clamped
//! navigation.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PagerError {
    #[error("total pages must be at least 1")]
    NoPages,
    #[error("window size must be at least 1")]
    EmptyWindow,
}

/// Computes the visible page window centered on `current_page`.
///
/// The window is contiguous, lies within `[1, total_pages]`, and has
/// length `min(window_size, total_pages)`. Near either boundary the
/// window shifts instead of shrinking, so the current page may sit
/// off-center there. A `current_page` outside `[1, total_pages]` is
/// clamped into range first.
#[must_use]
pub fn visible_pages(current_page: usize, total_pages: usize, window_size: usize) -> Vec<usize> {
    if total_pages == 0 || window_size == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let half = window_size / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = (start + window_size - 1).min(total_pages);
    if end - start + 1 < window_size {
        start = end.saturating_sub(window_size - 1).max(1);
    }

    (start..=end).collect()
}

/// Tracks the current page of a paginated collection.
///
/// Requests outside the valid page range are ignored rather than
/// reported as errors; `next_page`/`previous_page` saturate at the
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
    window_size: usize,
}

impl Pager {
    /// Creates a pager positioned on page 1.
    pub fn new(total_pages: usize, window_size: usize) -> Result<Self, PagerError> {
        if total_pages == 0 {
            return Err(PagerError::NoPages);
        }
        if window_size == 0 {
            return Err(PagerError::EmptyWindow);
        }
        Ok(Self {
            current_page: 1,
            total_pages,
            window_size,
        })
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the configured window size.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Checks if the current page is the first page.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_page == 1
    }

    /// Checks if the current page is the last page.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Jumps to the requested page.
    ///
    /// A request outside `[1, total_pages]` leaves the pager unchanged.
    /// Returns `true` if the current page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advances one page, saturating at the last page.
    ///
    /// Returns `true` if the current page changed.
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Steps back one page, saturating at the first page.
    ///
    /// Returns `true` if the current page changed.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// The page numbers a pagination control should currently display.
    #[must_use]
    pub fn visible_pages(&self) -> Vec<usize> {
        visible_pages(self.current_page, self.total_pages, self.window_size)
    }
}

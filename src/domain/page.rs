//! Type-safe pagination window over a room's message log.
//!
//! [`PageRequest`] holds a 1-indexed page number and a page size, both
//! non-zero by construction, and computes the half-open slice of the log
//! that the page covers.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Page number and size used when reading room history.
///
/// Both values are at least 1. The boundary layer resolves missing or
/// non-positive query values to defaults before building one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroUsize,
    size: NonZeroUsize,
}

impl PageRequest {
    /// Creates a page request from already validated values.
    #[must_use]
    pub const fn new(page: NonZeroUsize, size: NonZeroUsize) -> Self {
        Self { page, size }
    }

    /// Creates a page request from raw integers.
    ///
    /// Returns `None` if either value is zero.
    #[must_use]
    pub fn try_new(page: usize, size: usize) -> Option<Self> {
        Some(Self {
            page: NonZeroUsize::new(page)?,
            size: NonZeroUsize::new(size)?,
        })
    }

    /// Returns the 1-indexed page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page.get()
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size.get()
    }

    /// Returns the range `[start, end)` this page covers in a log of `len`
    /// entries.
    ///
    /// `start = (page - 1) * size` and `end = min(start + size, len)`.
    /// When `start >= len` the returned range is empty and positioned at
    /// `len`, so slicing with it always succeeds.
    #[must_use]
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = (self.page() - 1).saturating_mul(self.size());
        if start >= len {
            return len..len;
        }
        let end = start.saturating_add(self.size()).min(len);
        start..end
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn page(page: usize, size: usize) -> PageRequest {
        let Some(req) = PageRequest::try_new(page, size) else {
            panic!("valid page request");
        };
        req
    }

    #[test]
    fn zero_values_are_rejected() {
        assert!(PageRequest::try_new(0, 10).is_none());
        assert!(PageRequest::try_new(1, 0).is_none());
    }

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page(1, 2).window(3), 0..2);
    }

    #[test]
    fn last_page_is_truncated() {
        assert_eq!(page(2, 2).window(3), 2..3);
    }

    #[test]
    fn page_past_end_is_empty() {
        assert!(page(3, 2).window(3).is_empty());
        assert!(page(1, 10).window(0).is_empty());
    }

    #[test]
    fn exact_boundary_is_empty() {
        // start == len
        assert!(page(2, 3).window(3).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let window = page(usize::MAX, usize::MAX).window(5);
        assert!(window.is_empty());
    }
}

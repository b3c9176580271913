//! Page-state arithmetic for a single search response.

use serde::Serialize;

use crate::domain::types::PageSize;

/// Pages always linked at each end of the pager.
const EDGE_PAGES: i64 = 2;
/// Pages linked on either side of the current page.
const AROUND_CURRENT: i64 = 2;

/// Pagination state derived from `(requested_page, page_size, total_results)`.
///
/// Only the three inputs are stored; everything else is computed on demand.
/// Out-of-range inputs never panic: a negative `total_results` counts as zero
/// and a non-positive `requested_page` is carried through the arithmetic
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    requested_page: i64,
    page_size: PageSize,
    total_pages: i64,
}

impl PageState {
    pub fn new(requested_page: i64, page_size: PageSize, total_results: i64) -> Self {
        let total_results = total_results.max(0);
        let size = i64::from(page_size);
        let total_pages = total_results / size + i64::from(total_results % size != 0);

        Self {
            requested_page,
            page_size,
            total_pages,
        }
    }

    pub fn requested_page(&self) -> i64 {
        self.requested_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn is_last_page(&self) -> bool {
        self.requested_page >= self.total_pages
    }

    /// Page label shown as "current". The first page labels itself; every
    /// later page is labelled one below the requested number.
    pub fn current_page(&self) -> i64 {
        if self.requested_page == 1 {
            self.requested_page
        } else {
            self.requested_page.saturating_sub(1)
        }
    }

    /// May be zero or negative near the first page. Saturates at `i64::MIN`.
    pub fn previous_page(&self) -> i64 {
        self.current_page().saturating_sub(1)
    }

    /// Page to link as "next"; stays on the requested page once the last
    /// page is reached.
    pub fn next_page(&self) -> i64 {
        if self.is_last_page() {
            self.requested_page
        } else {
            self.requested_page.saturating_add(1)
        }
    }

    /// Numbered page links around the requested page, `None` marking a gap.
    pub fn window(&self) -> Vec<Option<i64>> {
        let last_page = self.total_pages;

        if last_page == 0 {
            return vec![];
        }

        let current = self.requested_page.clamp(1, last_page);
        let mut pages = Vec::new();

        let left_end = (1 + EDGE_PAGES).min(last_page.saturating_add(1));
        pages.extend((1..left_end).map(Some));

        let mid_start = left_end.max(current - AROUND_CURRENT);
        let mid_end = current
            .saturating_add(AROUND_CURRENT + 1)
            .min(last_page.saturating_add(1));

        if mid_start > left_end {
            pages.push(None);
        }
        pages.extend((mid_start..mid_end).map(Some));

        let right_start = mid_end.max(last_page - EDGE_PAGES + 1);

        if right_start > mid_end {
            pages.push(None);
        }
        pages.extend((right_start..=last_page).map(Some));

        pages
    }
}

/// Flattened view of [`PageState`] handed to templates.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageView {
    pub requested_page: i64,
    pub page_size: u32,
    pub total_pages: i64,
    pub current_page: i64,
    pub previous_page: i64,
    pub next_page: i64,
    pub is_last_page: bool,
    pub pages: Vec<Option<i64>>,
}

impl From<PageState> for PageView {
    fn from(state: PageState) -> Self {
        Self {
            requested_page: state.requested_page(),
            page_size: state.page_size().get(),
            total_pages: state.total_pages(),
            current_page: state.current_page(),
            previous_page: state.previous_page(),
            next_page: state.next_page(),
            is_last_page: state.is_last_page(),
            pages: state.window(),
        }
    }
}

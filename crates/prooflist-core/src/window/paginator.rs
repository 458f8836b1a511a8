//! Page state machine

use tracing::debug;

use super::links::{page_links, PageLink};
use super::page_size::PageSize;
use super::viewport::{default_page_size, is_default_size};

/// Snapshot of the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based
    pub current_page: usize,
    pub page_size: PageSize,
    /// Always at least 1
    pub total_pages: usize,
}

/// Tracks the current page over a list whose length changes.
///
/// After every [`Paginator::update_page_count`], `1 <= current_page <= total_pages`.
#[derive(Debug, Clone)]
pub struct Paginator {
    state: PageState,
    item_count: usize,
}

impl Paginator {
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            state: PageState {
                current_page: 1,
                page_size,
                total_pages: 1,
            },
            item_count: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> PageState {
        self.state
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.state.total_pages
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.state.page_size
    }

    /// Recompute the page count for `total_items` and clamp the current page
    pub fn update_page_count(&mut self, total_items: usize) {
        self.item_count = total_items;
        self.state.total_pages = match self.state.page_size {
            PageSize::All => 1,
            PageSize::Count(size) => total_items.div_ceil(size.get()).max(1),
        };
        self.state.current_page = self.state.current_page.clamp(1, self.state.total_pages);
    }

    /// Jump to `page`. Out-of-range pages are refused and change nothing.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.state.total_pages {
            self.state.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.state.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Change the page size, keeping the first visible item on screen.
    ///
    /// Switching to or from [`PageSize::All`] goes back to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.state.current_page = match (self.state.page_size, page_size) {
            (PageSize::Count(old), PageSize::Count(new)) => {
                let first_item = (self.state.current_page - 1) * old.get() + 1;
                first_item.div_ceil(new.get()).max(1)
            }
            _ => 1,
        };
        debug!(
            "Page size {} -> {}, now on page {}",
            self.state.page_size, page_size, self.state.current_page
        );
        self.state.page_size = page_size;
        self.update_page_count(self.item_count);
    }

    /// Switch between the mobile and desktop defaults on resize.
    ///
    /// Custom sizes and All are left alone. Returns whether the size changed.
    pub fn adapt_to_viewport(&mut self, viewport_width: u32) -> bool {
        let preferred = default_page_size(viewport_width);
        let current = self.state.page_size;
        if is_default_size(current) && current != preferred {
            self.set_page_size(preferred);
            return true;
        }
        false
    }

    /// The items of the current page
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.state.page_size {
            PageSize::All => items,
            PageSize::Count(size) => {
                let start = ((self.state.current_page - 1) * size.get()).min(items.len());
                let end = (start + size.get()).min(items.len());
                &items[start..end]
            }
        }
    }

    /// Human-readable range of the current page
    #[must_use]
    pub fn info_text(&self, total_items: usize) -> String {
        if total_items == 0 {
            return "No results".to_string();
        }
        match self.state.page_size {
            PageSize::All => format!("Showing all {total_items} results"),
            PageSize::Count(size) => {
                let start = (self.state.current_page - 1) * size.get() + 1;
                let end = (self.state.current_page * size.get()).min(total_items);
                format!("Showing {start} to {end} of {total_items} results")
            }
        }
    }

    /// Back to page 1
    pub fn reset(&mut self) {
        self.state.current_page = 1;
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.state.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.state.page_size.is_all() && self.state.current_page < self.state.total_pages
    }

    /// Page strip for navigation. Empty when there is a single page or under All.
    #[must_use]
    pub fn page_links(&self, max_visible: usize) -> Vec<PageLink> {
        if self.state.page_size.is_all() {
            return Vec::new();
        }
        page_links(self.state.current_page, self.state.total_pages, max_visible)
    }
}

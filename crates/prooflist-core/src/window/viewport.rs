//! Viewport-dependent default page sizes

use std::num::NonZeroUsize;

use super::page_size::PageSize;

/// Widths below this are treated as mobile
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const MOBILE_PAGE_SIZE: PageSize = fixed(10);
pub const DESKTOP_PAGE_SIZE: PageSize = fixed(50);

const fn fixed(count: usize) -> PageSize {
    match NonZeroUsize::new(count) {
        Some(n) => PageSize::Count(n),
        None => PageSize::All,
    }
}

/// Default page size for a viewport width
#[must_use]
pub fn default_page_size(viewport_width: u32) -> PageSize {
    if viewport_width < MOBILE_BREAKPOINT {
        MOBILE_PAGE_SIZE
    } else {
        DESKTOP_PAGE_SIZE
    }
}

pub(crate) fn is_default_size(size: PageSize) -> bool {
    size == MOBILE_PAGE_SIZE || size == DESKTOP_PAGE_SIZE
}

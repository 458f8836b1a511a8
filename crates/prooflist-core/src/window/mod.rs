//! Window module: Pagination over the result list
//!
//! The paginator is a plain state machine. It never sees the items themselves
//! except in [`Paginator::slice`], so callers refresh it with the item count
//! whenever the list changes.

mod links;
mod page_size;
mod paginator;
mod viewport;

pub use links::PageLink;
pub use page_size::{PageSize, ParsePageSizeError};
pub use paginator::{PageState, Paginator};
pub use viewport::{default_page_size, DESKTOP_PAGE_SIZE, MOBILE_BREAKPOINT, MOBILE_PAGE_SIZE};

//! Compact page number strip

use serde::Serialize;

/// One entry of the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Build the strip: first page, a window of `max_visible` pages around the
/// current one, last page, with ellipses where pages are skipped.
pub(crate) fn page_links(current: usize, total_pages: usize, max_visible: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    if total_pages <= 1 || max_visible == 0 {
        return links;
    }

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let page = |number: usize| PageLink::Page {
        number,
        current: number == current,
    };

    if start > 1 {
        links.push(page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.extend((start..=end).map(page));

    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(page(total_pages));
    }

    links
}

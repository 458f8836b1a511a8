//! Text and JSON output of a session

use std::fmt::Write as _;

use anyhow::Result;
use prooflist_core::session::{HashSession, PageView};
use prooflist_core::window::PageLink;

use crate::commands::types::HashArgs;

/// Everything the command prints to stdout, per the output flags
///
/// # Errors
/// Returns an error if the page cannot be serialized to JSON.
pub fn render_output(session: &HashSession, args: &HashArgs) -> Result<String> {
    if args.json {
        let mut json = serde_json::to_string_pretty(&session.page_view())?;
        json.push('\n');
        return Ok(json);
    }
    if args.lines {
        let mut text = session.clipboard_text();
        if !text.is_empty() {
            text.push('\n');
        }
        return Ok(text);
    }
    Ok(render_page(&session.page_view()))
}

/// One `hash  name.ext` line per row, then the range and page strip
#[must_use]
pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();
    for row in &view.rows {
        let _ = writeln!(out, "{}  {}", row.hash, row.display_name());
    }
    let _ = writeln!(out, "{}", view.info);
    if view.show_controls && !view.links.is_empty() {
        let _ = writeln!(out, "Pages: {}", render_links(&view.links));
    }
    out
}

/// The page strip as text: `1 ... 4 [5] 6 ... 10`
#[must_use]
pub fn render_links(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

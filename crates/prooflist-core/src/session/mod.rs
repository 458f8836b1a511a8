//! Session module: One result list presented a page at a time
//!
//! Couples a [`HashPipeline`] handle with a [`Paginator`] and keeps the two
//! in step, the way a front-end would after every user action.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::export::{to_clipboard_text, to_csv};
use crate::ingest::BusyProbe;
use crate::notice::{Notice, Notifier};
use crate::pipeline::{
    BatchObserver, BatchSummary, FileResult, FileSource, HashPipeline, PipelineError, ResultId,
};
use crate::window::{PageLink, PageSize, PageState, Paginator};

/// Pages shown around the current one in the page strip
pub const MAX_VISIBLE_PAGES: usize = 3;

/// Results beyond this count always show the page controls
const CONTROLS_THRESHOLD: usize = 10;

pub const CLEAR_WHILE_BUSY: &str = "Cannot clear files while processing. Please wait...";

impl BusyProbe for HashPipeline {
    fn is_busy(&self) -> bool {
        HashPipeline::is_busy(self)
    }
}

/// Everything needed to render the current page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub rows: Vec<FileResult>,
    pub info: String,
    pub links: Vec<PageLink>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub total_results: usize,
    /// Whether the pagination bar is worth showing at all
    pub show_controls: bool,
}

/// A pipeline handle and its paginator
pub struct HashSession {
    pipeline: HashPipeline,
    paginator: Paginator,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for HashSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashSession")
            .field("pipeline", &self.pipeline)
            .field("paginator", &self.paginator)
            .finish_non_exhaustive()
    }
}

impl HashSession {
    #[must_use]
    pub fn new(pipeline: HashPipeline, page_size: PageSize) -> Self {
        let notifier = pipeline.notifier();
        let mut paginator = Paginator::new(page_size);
        paginator.update_page_count(pipeline.len());
        Self {
            pipeline,
            paginator,
            notifier,
        }
    }

    #[must_use]
    pub fn pipeline(&self) -> &HashPipeline {
        &self.pipeline
    }

    /// Page state against the current result count
    #[must_use]
    pub fn page_state(&self) -> PageState {
        self.synced().state()
    }

    /// Hash a batch, then bring pagination up to date.
    ///
    /// # Errors
    /// Whatever [`HashPipeline::submit_batch`] rejects the batch with.
    pub async fn ingest<F, O>(
        &mut self,
        files: Vec<F>,
        observer: &mut O,
    ) -> Result<BatchSummary, PipelineError>
    where
        F: FileSource,
        O: BatchObserver + ?Sized,
    {
        let outcome = self.pipeline.submit_batch(files, observer).await;
        self.refresh();
        outcome
    }

    pub fn remove(&mut self, id: &ResultId) -> bool {
        let removed = self.pipeline.remove_by_id(id);
        if removed {
            self.refresh();
        }
        removed
    }

    /// Drop all results and go back to page 1. Refused while a batch runs.
    pub fn clear(&mut self) -> bool {
        if self.pipeline.clear().is_err() {
            self.notifier.notify(Notice::warning(CLEAR_WHILE_BUSY));
            return false;
        }
        self.paginator.reset();
        self.refresh();
        debug!("Session cleared");
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.refresh();
        self.paginator.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.refresh();
        self.paginator.prev_page()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.refresh();
        self.paginator.go_to_page(page)
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.refresh();
        self.paginator.set_page_size(page_size);
        self.refresh();
    }

    pub fn adapt_to_viewport(&mut self, viewport_width: u32) -> bool {
        self.refresh();
        self.paginator.adapt_to_viewport(viewport_width)
    }

    #[must_use]
    pub fn page_view(&self) -> PageView {
        let results = self.pipeline.snapshot();
        let total_results = results.len();
        let mut paginator = self.paginator.clone();
        paginator.update_page_count(total_results);
        let state = paginator.state();

        PageView {
            rows: paginator.slice(&results).to_vec(),
            info: paginator.info_text(total_results),
            links: paginator.page_links(MAX_VISIBLE_PAGES),
            current_page: state.current_page,
            total_pages: state.total_pages,
            has_prev: paginator.has_prev(),
            has_next: paginator.has_next(),
            total_results,
            show_controls: total_results > 0
                && (state.total_pages > 1 || total_results > CONTROLS_THRESHOLD),
        }
    }

    #[must_use]
    pub fn csv(&self) -> String {
        to_csv(&self.pipeline.export_rows())
    }

    #[must_use]
    pub fn clipboard_text(&self) -> String {
        to_clipboard_text(&self.pipeline.export_rows())
    }

    /// Copy of the paginator counted against the current result list
    fn synced(&self) -> Paginator {
        let mut paginator = self.paginator.clone();
        paginator.update_page_count(self.pipeline.len());
        paginator
    }

    fn refresh(&mut self) {
        self.paginator.update_page_count(self.pipeline.len());
    }
}

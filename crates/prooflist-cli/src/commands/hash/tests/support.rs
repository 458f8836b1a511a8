//! Shared fixtures for hash command tests

use std::path::PathBuf;

use prooflist_core::pipeline::MAX_BATCH_SIZE;
use prooflist_core::window::{PageSize, DESKTOP_PAGE_SIZE};

use crate::commands::types::HashArgs;

pub fn args(paths: Vec<PathBuf>) -> HashArgs {
    HashArgs {
        paths,
        page_size: DESKTOP_PAGE_SIZE,
        page: None,
        csv: None,
        lines: false,
        json: false,
        max_batch_size: MAX_BATCH_SIZE,
        skip_hidden: false,
        no_ignore: false,
    }
}

pub fn with_page_size(mut args: HashArgs, page_size: PageSize) -> HashArgs {
    args.page_size = page_size;
    args
}

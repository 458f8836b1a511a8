//! Command arguments shared between main and library

use std::path::PathBuf;

use clap::Args;
use prooflist_core::pipeline::MAX_BATCH_SIZE;
use prooflist_core::window::{PageSize, DESKTOP_PAGE_SIZE};

#[derive(Args, Debug, Clone)]
pub struct HashArgs {
    /// Files or directories to hash; each path is submitted as its own batch
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Results per page: a positive number or "all"
    #[arg(long, default_value_t = DESKTOP_PAGE_SIZE, allow_negative_numbers = true)]
    pub page_size: PageSize,

    /// Page to print (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Write a CSV export; without a value a timestamped name is generated
    #[arg(long, num_args = 0..=1, value_name = "FILE")]
    pub csv: Option<Option<PathBuf>>,

    /// Print every result as "hash: name.ext" instead of the current page
    #[arg(long, conflicts_with = "json")]
    pub lines: bool,

    /// Print the current page as JSON
    #[arg(long)]
    pub json: bool,

    /// Maximum number of results kept
    #[arg(long, default_value_t = MAX_BATCH_SIZE)]
    pub max_batch_size: usize,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Do not honour .gitignore and .ignore files
    #[arg(long)]
    pub no_ignore: bool,
}

//! Hash module: Hash paths on disk and print the proof list

mod observer;
mod render;
mod run;

pub use observer::ProgressLogger;
pub use render::{render_links, render_output, render_page};
pub use run::{collect_batches, hash_paths, run, write_csv};

#[cfg(test)]
mod tests;

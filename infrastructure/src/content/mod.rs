//! Filesystem content adapters

mod front_matter;
mod fs_store;

pub use front_matter::{FrontMatter, FrontMatterError, FrontMatterFormat, parse_front_matter};
pub use fs_store::{BLOG_DIR, FsContentStore, WORK_DIR};

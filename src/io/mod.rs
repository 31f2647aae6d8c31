//! Filesystem access: enumerating the files a rename pass works on.
pub mod listing;

pub use listing::list_regular_files;

//! Index sources backed by persisted files

mod json_file;

pub use json_file::JsonFileIndexSource;

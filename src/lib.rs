pub mod book;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod fs;
pub mod library;
pub mod prompt;
pub mod stats;
pub mod utils;

pub use book::{Book, NewBook, SearchField};
pub use error::{LibraryError, LibraryResult};
pub use export::{Export, ExportFormat};
pub use fs::{JsonFile, Storage};
pub use library::Library;
pub use stats::Statistics;

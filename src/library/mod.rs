//! Persistence and in-memory store, split across logical submodules.

mod error;
mod record;
mod store;

pub use error::{LibraryError, RecordError};
pub use record::parse_record;
pub use store::{Library, DEFAULT_LIBRARY_FILE};

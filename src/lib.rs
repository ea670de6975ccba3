//! Core library surface for the Not Spotify console music library.
//!
//! The modules exposed here keep the `bin` target thin: it only wires the
//! configuration, the file-backed store and the menu loop together.
pub mod config;
pub mod library;
pub mod models;
pub mod ui;

/// The resolved runtime configuration and its command-line form.
pub use config::{Cli, Config};

/// The file-backed store and the failures it reports.
pub use library::{Library, LibraryError, RecordError};

pub use models::Song;

/// The interactive console entry point and state container.
pub use ui::{run_app, App};

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading or writing the library file. None of them
/// are fatal to a session: the console layer logs them and keeps going with
/// whatever is in memory.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write library file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record on line {line} of {}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Why a single `title,artist,playCount` line could not be turned into a song.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid play count {value:?}")]
    InvalidPlayCount {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

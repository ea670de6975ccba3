use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::Song;

use super::error::LibraryError;
use super::record::parse_record;

/// File name used when no library path is configured. Relative to the working
/// directory.
pub const DEFAULT_LIBRARY_FILE: &str = "songs.txt";

/// Ordered, file-backed collection of songs.
///
/// The store owns the path it persists to. Structural mutations (`add`,
/// `remove`) write the whole sequence back; views never touch the disk. The
/// file is re-opened on every load and save, nothing is held open between
/// calls.
#[derive(Debug)]
pub struct Library {
    path: PathBuf,
    songs: Vec<Song>,
}

impl Library {
    /// Create an empty store bound to `path`. Call [`Library::load`] to
    /// hydrate it from disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            songs: Vec::new(),
        }
    }

    /// Seed a store with songs already in memory, keeping their order.
    pub fn with_songs(path: impl Into<PathBuf>, songs: Vec<Song>) -> Self {
        Self {
            path: path.into(),
            songs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Replace the in-memory sequence with the records stored on disk and
    /// return how many were read.
    ///
    /// A missing file yields an empty library. A malformed line stops the
    /// load; records parsed before it remain in memory. Blank lines are
    /// skipped.
    pub fn load(&mut self) -> Result<usize, LibraryError> {
        self.songs.clear();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no library file at {}, starting empty", self.path.display());
                return Ok(0);
            }
            Err(source) => return Err(self.read_error(source)),
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| self.read_error(source))?;
            if line.trim().is_empty() {
                continue;
            }

            let song = parse_record(&line).map_err(|source| LibraryError::Parse {
                path: self.path.clone(),
                line: index + 1,
                source,
            })?;
            self.songs.push(song);
        }

        log::info!(
            "loaded {} songs from {}",
            self.songs.len(),
            self.path.display()
        );
        Ok(self.songs.len())
    }

    /// Overwrite the library file with one record per song, in current order.
    pub fn save(&self) -> Result<(), LibraryError> {
        let write_all = || -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            for song in &self.songs {
                writeln!(writer, "{}", song.to_record())?;
            }
            writer.flush()
        };

        write_all().map_err(|source| LibraryError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("saved {} songs to {}", self.songs.len(), self.path.display());
        Ok(())
    }

    /// Append a song, re-sort by title and persist.
    ///
    /// The song stays in memory even if the save fails.
    pub fn add(&mut self, song: Song) -> Result<(), LibraryError> {
        self.songs.push(song);
        self.sort_by_title();
        self.save()
    }

    /// Remove the first song whose title matches, ignoring case. The file is
    /// only rewritten when something was removed.
    pub fn remove(&mut self, title: &str) -> Result<Option<Song>, LibraryError> {
        let Some(index) = self.songs.iter().position(|song| song.title_matches(title)) else {
            return Ok(None);
        };

        let removed = self.songs.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    /// First song whose title matches, ignoring case.
    pub fn find(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.title_matches(title))
    }

    pub fn list_all(&self) -> &[Song] {
        &self.songs
    }

    /// Songs played at least `min_play_count` times, most played first. Ties
    /// keep their library order.
    pub fn filter_by_min_play_count(&self, min_play_count: u32) -> Vec<&Song> {
        let mut filtered: Vec<&Song> = self
            .songs
            .iter()
            .filter(|song| song.play_count() >= min_play_count)
            .collect();
        filtered.sort_by(|a, b| b.play_count().cmp(&a.play_count()));
        filtered
    }

    /// Look up the song to play. The play count is left untouched; the caller
    /// owns the playback simulation.
    pub fn play(&self, title: &str) -> Option<&Song> {
        let song = self.find(title)?;
        log::info!("playing {} by {}", song.title(), song.artist());
        Some(song)
    }

    fn sort_by_title(&mut self) {
        self.songs
            .sort_by(|a, b| a.title().to_lowercase().cmp(&b.title().to_lowercase()));
    }

    fn read_error(&self, source: io::Error) -> LibraryError {
        LibraryError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

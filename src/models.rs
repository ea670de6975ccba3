//! Domain model for a catalogued song. The type stays a light-weight data
//! holder so the store can focus on ordering and persistence and the console
//! layer on presentation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single entry in the music library. Title and artist are fixed once the
/// song is created; only the play count moves.
pub struct Song {
    title: String,
    artist: String,
    play_count: u32,
}

impl Song {
    /// Surrounding whitespace is stripped from title and artist, the same way
    /// stored records are read back.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, play_count: u32) -> Self {
        Self {
            title: trimmed(title.into()),
            artist: trimmed(artist.into()),
            play_count,
        }
    }

    /// Title shown in listings and used for lookups.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Bump the play count by one. Nothing is persisted until the owning
    /// library is saved.
    pub fn increment_play_count(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }

    /// Case-insensitive title comparison used by every lookup in the store.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Serialize into the `title,artist,playCount` line stored on disk.
    /// Commas inside fields are written as-is.
    pub fn to_record(&self) -> String {
        self.to_string()
    }
}

fn trimmed(mut field: String) -> String {
    let end = field.trim_end().len();
    field.truncate(end);
    let start = field.len() - field.trim_start().len();
    field.drain(..start);
    field
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.title, self.artist, self.play_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_joins_fields_with_commas() {
        let song = Song::new("Song A", "Artist2", 10);
        assert_eq!(song.to_record(), "Song A,Artist2,10");
    }

    #[test]
    fn embedded_commas_are_not_escaped() {
        let song = Song::new("Hello, Goodbye", "The Beatles", 3);
        assert_eq!(song.to_record(), "Hello, Goodbye,The Beatles,3");
    }

    #[test]
    fn padding_is_stripped_at_creation() {
        let song = Song::new(" Intro ", "\tBand  ", 1);
        assert_eq!(song.title(), "Intro");
        assert_eq!(song.artist(), "Band");
        assert_eq!(song.to_record(), "Intro,Band,1");
    }

    #[test]
    fn increment_only_touches_play_count() {
        let mut song = Song::new("Song A", "Artist2", 10);
        song.increment_play_count();
        assert_eq!(song.play_count(), 11);
        assert_eq!(song.title(), "Song A");
        assert_eq!(song.artist(), "Artist2");
    }

    #[test]
    fn increment_saturates() {
        let mut song = Song::new("Loop", "Forever", u32::MAX);
        song.increment_play_count();
        assert_eq!(song.play_count(), u32::MAX);
    }

    #[test]
    fn title_matching_ignores_case() {
        let song = Song::new("Bohemian Rhapsody", "Queen", 1);
        assert!(song.title_matches("bohemian RHAPSODY"));
        assert!(!song.title_matches("Bohemian"));
    }
}

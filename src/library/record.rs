use std::str::FromStr;

use crate::models::Song;

use super::error::RecordError;

/// Parse one stored line into a song. Fields are trimmed; anything past the
/// third comma-separated field is ignored.
pub fn parse_record(line: &str) -> Result<Song, RecordError> {
    let mut fields = line.split(',').map(str::trim);

    let title = fields.next().ok_or(RecordError::MissingField("title"))?;
    let artist = fields.next().ok_or(RecordError::MissingField("artist"))?;
    let raw_count = fields
        .next()
        .ok_or(RecordError::MissingField("play count"))?;

    let play_count = raw_count
        .parse::<u32>()
        .map_err(|source| RecordError::InvalidPlayCount {
            value: raw_count.to_string(),
            source,
        })?;

    Ok(Song::new(title, artist, play_count))
}

impl FromStr for Song {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_record(line)
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table, Widget};

use crate::models::Song;

use super::helpers::buffer_lines;

/// Column widths for title, artist and play count.
const COLUMN_WIDTHS: [u16; 3] = [40, 30, 12];
const COLUMN_SPACING: u16 = 1;
const HEADER: [&str; 3] = ["Song Title", "Artist", "Play Count"];
/// Width of the dashed rule under the header.
const RULE_WIDTH: usize = 87;
/// Rows rendered per buffer pass, keeping each buffer well inside `u16` area
/// limits.
const ROWS_PER_PASS: usize = 256;

/// Total character width of a rendered table row.
pub(crate) fn table_width() -> u16 {
    COLUMN_WIDTHS.iter().sum::<u16>() + COLUMN_SPACING * (COLUMN_WIDTHS.len() as u16 - 1)
}

/// Render songs as a fixed-width table: a header line, a dashed rule, then one
/// line per song. Overlong fields are cut at the column edge.
pub(crate) fn render_song_table<'a, I>(songs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Song>,
{
    let mut lines = render_rows(Vec::new(), Some(Row::new(HEADER)));
    lines.push("-".repeat(RULE_WIDTH));

    let mut rows = songs.into_iter().map(song_row).peekable();
    while rows.peek().is_some() {
        let pass: Vec<Row> = rows.by_ref().take(ROWS_PER_PASS).collect();
        lines.extend(render_rows(pass, None));
    }
    lines
}

fn song_row(song: &Song) -> Row<'static> {
    Row::new(vec![
        song.title().to_string(),
        song.artist().to_string(),
        song.play_count().to_string(),
    ])
}

fn render_rows<'a>(rows: Vec<Row<'a>>, header: Option<Row<'a>>) -> Vec<String> {
    let height = rows.len() as u16 + u16::from(header.is_some());
    let mut table =
        Table::new(rows, COLUMN_WIDTHS.map(Constraint::Length)).column_spacing(COLUMN_SPACING);
    if let Some(header) = header {
        table = table.header(header);
    }

    let area = Rect::new(0, 0, table_width(), height);
    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer_lines(&buffer)
}

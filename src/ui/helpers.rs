use std::error::Error;

use ratatui::buffer::{Buffer, Cell};
use unicode_width::UnicodeWidthStr;

/// Flatten a rendered buffer into plain text, one string per row with
/// trailing blanks removed. Cells hidden under a double-width symbol are
/// skipped.
pub(crate) fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::with_capacity(area.width as usize);
            let mut x = area.left();
            while x < area.right() {
                let symbol = buffer.cell((x, y)).map_or(" ", Cell::symbol);
                line.push_str(symbol);
                let width = symbol.width().max(1);
                x = x.saturating_add(u16::try_from(width).unwrap_or(u16::MAX));
            }
            line.truncate(line.trim_end().len());
            line
        })
        .collect()
}

/// Render an error with its whole source chain on one line, e.g.
/// `malformed record on line 2 of songs.txt: invalid play count "x": ...`.
pub(crate) fn surface_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

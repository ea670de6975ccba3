use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::queue;
use crossterm::style::{ContentStyle, Print, PrintStyledContent, Stylize};

use crate::library::{Library, LibraryError};
use crate::models::Song;

use super::helpers::surface_error;
use super::menu::MenuOption;
use super::table::render_song_table;

/// Console application state: the library being managed plus the streams the
/// menu talks through. Generic over the streams so sessions can be scripted.
pub struct App<R, W> {
    library: Library,
    play_duration: Duration,
    color: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(library: Library, play_duration: Duration, input: R, output: W) -> Self {
        Self {
            library,
            play_duration,
            color: false,
            input,
            output,
        }
    }

    /// Enable ANSI styling for headings, errors and the now-playing line.
    /// Off by default so piped output stays plain text.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Give back the library and output stream once the session is over.
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.output)
    }

    /// Hydrate the library from disk. A failed load is reported on the console
    /// and the session carries on with whatever was read.
    pub fn load_library(&mut self) -> Result<()> {
        if let Err(err) = self.library.load() {
            log::error!("{}", surface_error(&err));
            self.error_line("Error whilst loading songs")?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    pub(crate) fn draw_menu(&mut self) -> Result<()> {
        self.styled_line("----- Not Spotify -----", ContentStyle::new().bold())?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option.number(), option.label())
                .context("failed to draw menu")?;
        }
        Ok(())
    }

    /// Read one menu selection. `None` means input is exhausted.
    pub(crate) fn read_selection(&mut self) -> Result<Option<String>> {
        let selection = self.prompt("Choose an option: ")?;
        if selection.is_some() {
            writeln!(self.output)?;
        }
        Ok(selection)
    }

    /// Run the action behind a menu entry. Returns `true` when the user asked
    /// to exit.
    pub(crate) fn handle_option(&mut self, option: MenuOption) -> Result<bool> {
        match option {
            MenuOption::Play => self.play_song()?,
            MenuOption::Add => self.add_song()?,
            MenuOption::Remove => self.remove_song()?,
            MenuOption::ViewLibrary => self.view_library()?,
            MenuOption::ViewByPlayCount => self.view_by_play_count()?,
            MenuOption::Exit => {
                writeln!(self.output, "Exiting the application.")?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub(crate) fn invalid_selection(&mut self) -> Result<()> {
        self.error_line("Invalid option. Please try again.")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn play_song(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter the title of the song you want to play: ")? else {
            return Ok(());
        };

        match self.library.play(&title) {
            Some(song) => {
                let message = format!("Now playing: {} by {}...", song.title(), song.artist());
                self.styled_line(&message, ContentStyle::new().green())?;
                writeln!(self.output)?;
                self.output.flush()?;
                thread::sleep(self.play_duration);
            }
            None => writeln!(self.output, "Song not found in your library\n")?,
        }
        Ok(())
    }

    fn add_song(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter song title: ")? else {
            return Ok(());
        };
        let Some(artist) = self.prompt("Enter artist name: ")? else {
            return Ok(());
        };
        let Some(play_count) = self.prompt_count("Enter play count: ")? else {
            return Ok(());
        };

        let song = Song::new(title, artist, play_count);
        writeln!(
            self.output,
            "{} by {} added to library!\n",
            song.title(),
            song.artist()
        )?;
        let result = self.library.add(song);
        self.report_save(result)
    }

    fn remove_song(&mut self) -> Result<()> {
        let Some(title) =
            self.prompt("Enter the title of the song that you want to remove from your library: ")?
        else {
            return Ok(());
        };

        match self.library.remove(&title) {
            Ok(Some(_)) => {
                writeln!(self.output, "{title} has been removed from your library.\n")?;
            }
            Ok(None) => writeln!(self.output, "Song not found in your library.\n")?,
            Err(err) => {
                writeln!(self.output, "{title} has been removed from your library.\n")?;
                self.report_save(Err(err))?;
            }
        }
        Ok(())
    }

    fn view_library(&mut self) -> Result<()> {
        if self.library.is_empty() {
            writeln!(self.output, "Your library is empty.\n")?;
            return Ok(());
        }

        let lines = render_song_table(self.library.list_all());
        self.print_table("----- Your Song Library -----", &lines)
    }

    fn view_by_play_count(&mut self) -> Result<()> {
        let Some(min_play_count) = self.prompt_count("Enter the minimum play count: ")? else {
            return Ok(());
        };

        let filtered = self.library.filter_by_min_play_count(min_play_count);
        if filtered.is_empty() {
            writeln!(
                self.output,
                "No songs found with a play count of {min_play_count} or higher.\n"
            )?;
            return Ok(());
        }

        let lines = render_song_table(filtered);
        let heading = format!("----- Songs with at least {min_play_count} plays -----");
        self.print_table(&heading, &lines)
    }

    fn print_table(&mut self, heading: &str, lines: &[String]) -> Result<()> {
        self.styled_line(heading, ContentStyle::new().bold())?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Print `label` and read one line of input without its line ending.
    /// `None` signals end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt for a play count. Input that is not a non-negative integer is
    /// reported and yields `None`.
    fn prompt_count(&mut self, label: &str) -> Result<Option<u32>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.trim().parse::<u32>() {
            Ok(count) => Ok(Some(count)),
            Err(_) => {
                self.error_line("Invalid play count.")?;
                writeln!(self.output)?;
                Ok(None)
            }
        }
    }

    fn report_save(&mut self, result: Result<(), LibraryError>) -> Result<()> {
        if let Err(err) = result {
            log::error!("{}", surface_error(&err));
            self.error_line("Error saving songs")?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn error_line(&mut self, message: &str) -> Result<()> {
        self.styled_line(message, ContentStyle::new().red())
    }

    fn styled_line(&mut self, text: &str, style: ContentStyle) -> Result<()> {
        if self.color {
            queue!(self.output, PrintStyledContent(style.apply(text)), Print("\n"))
                .context("failed to write styled line")
        } else {
            writeln!(self.output, "{text}").context("failed to write line")
        }
    }
}

//! Binary entry point: bring up logging, resolve configuration, hydrate the
//! library from its text file and drive the menu loop until the user exits.
use std::io::{self, IsTerminal};

use env_logger::Env;
use music_library::{run_app, App, Config, Library};

/// Returning a `Result` surfaces console I/O failures to the terminal. Library
/// load and save problems are reported inside the session instead.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::from_args();
    let library = Library::new(&config.library_path);
    log::debug!("using library file {}", library.path().display());

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut app =
        App::new(library, config.play_duration, io::stdin().lock(), stdout).with_color(color);
    app.load_library()?;
    run_app(&mut app)
}

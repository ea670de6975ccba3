use std::io::{BufRead, Write};

use anyhow::Result;

use super::app::App;
use super::menu::MenuOption;

/// Drive the numbered menu until the user picks Exit or input runs out.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    loop {
        app.draw_menu()?;

        let Some(selection) = app.read_selection()? else {
            log::debug!("console input closed, leaving menu loop");
            break;
        };

        match MenuOption::from_selection(&selection) {
            Some(option) => {
                if app.handle_option(option)? {
                    break;
                }
            }
            None => {
                log::debug!("rejected menu selection {selection:?}");
                app.invalid_selection()?;
            }
        }
    }

    Ok(())
}

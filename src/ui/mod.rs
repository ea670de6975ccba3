//! Console front-end: the numbered menu, its prompts, and table rendering.

mod app;
mod helpers;
mod menu;
mod table;
mod terminal;

pub use app::App;
pub use terminal::run_app;

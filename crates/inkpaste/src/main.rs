//! inkpaste — paste-ready syntax highlighting.
//!
//! Renders a source snippet as one self-contained HTML fragment styled
//! entirely with inline `style` attributes, for pasting into hosts that
//! strip stylesheets and classes. `render` is the workhorse; `themes` and
//! `languages` list what is available.

use clap::Parser;
use console::style;

mod cli;
mod commands;
mod state;

use cli::{Cli, Command};
use state::StateStore;

fn main() {
    let cli = Cli::parse();
    let store = StateStore::default_location().map(StateStore::new);

    let result = match &cli.command {
        Command::Render(args) => commands::render(args, store.as_ref()),
        Command::Themes(args) => commands::themes(args, store.as_ref()),
        Command::Languages => commands::languages(),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}

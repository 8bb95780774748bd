use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use folio_config::Config;
use ratatui::DefaultTerminal;

use crate::app::App;
use crate::cli::Cli;

mod app;
mod cli;
mod hero;
mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = logging::init(Config::data_dir().as_deref());

    let config = cli.load_config()?;
    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    if cli.write_config {
        let path = cli.save_config(&config)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = run(app, terminal);
    ratatui::restore();
    result
}

/// Run `app` with mouse capture enabled for its lifetime.
fn run(app: App, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = app.run(terminal);
    let released = execute!(io::stdout(), DisableMouseCapture);
    result?;
    Ok(released?)
}

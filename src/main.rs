mod environment;
mod inventory;
mod snapshot;
mod ui;

use crate::environment::Environment;
use crate::inventory::EngineClient;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Read-only terminal dashboard for Docker containers, images, volumes, and networks
struct Args {}

#[tokio::main]
async fn main() {
    let _args = Args::parse();

    // The engine endpoint comes from DOCKER_HOST; unsupported schemes are a
    // startup error, reported before the terminal is touched.
    let environment = match Environment::from_env() {
        Ok(environment) => environment,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = start(environment).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Starts the dashboard against the given engine environment.
async fn start(environment: Environment) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let client = EngineClient::new(environment);
    let app = ui::App::new(Arc::new(client));
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

//! Main application state and UI loop
//!
//! One logical loop owns the dashboard state: it drains completed fetch
//! results from a channel, polls the terminal for input, applies both
//! through the dashboard's `update` function, and redraws. Fetches run on
//! spawned tasks so the loop stays responsive while one is outstanding;
//! when refreshes overlap, the later result simply wins.

use crate::inventory::Inventory;
use crate::snapshot::load_snapshot;
use crate::ui::dashboard::{Action, DashboardState, render_dashboard};
use crate::ui::events::{Event, KeyCommand};
use crossterm::event::{self, Event as TerminalEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const EVENT_QUEUE_SIZE: usize = 16;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    /// The dashboard state machine.
    dashboard: DashboardState,

    /// Receives snapshots from fetch tasks.
    event_receiver: mpsc::Receiver<Event>,

    /// Cloned into each spawned fetch task.
    event_sender: mpsc::Sender<Event>,

    /// The inventory collaborator the fetch tasks read from.
    inventory: Arc<dyn Inventory>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(inventory: Arc<dyn Inventory>) -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
        Self {
            dashboard: DashboardState::new(),
            event_receiver,
            event_sender,
            inventory,
        }
    }

    /// Starts one fetch on its own task. The result comes back through the
    /// event channel as a single `DataLoaded` event.
    fn spawn_fetch(&self) {
        let inventory = self.inventory.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let snapshot = load_snapshot(inventory.as_ref()).await;
            let _ = sender.send(Event::DataLoaded(snapshot)).await;
        });
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// dashboard until the quit command.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Seed the dashboard with the current terminal dimensions
    if let Ok(size) = terminal.size() {
        app.dashboard
            .update(Event::Resize(size.width, size.height));
    }

    // Initial load
    app.spawn_fetch();

    loop {
        // Queue all completed fetch results for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.update(event);
        }

        terminal.draw(|f| render_dashboard(f, &app.dashboard))?;

        // Poll for terminal events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                TerminalEvent::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    let Some(command) = KeyCommand::from_key(key) else {
                        continue;
                    };
                    match app.dashboard.update(Event::Key(command)) {
                        Action::Quit => return Ok(()),
                        Action::Refresh => app.spawn_fetch(),
                        Action::None => {}
                    }
                }
                TerminalEvent::Resize(width, height) => {
                    app.dashboard.update(Event::Resize(width, height));
                }
                _ => {}
            }
        }
    }
}

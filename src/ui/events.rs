//! Dashboard event system
//!
//! The UI loop reduces everything that can happen (key presses, terminal
//! resizes, completed fetches) to one closed [`Event`] type consumed by
//! the dashboard's `update` function.

use crate::snapshot::ResourceSnapshot;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single event delivered to the dashboard state machine.
#[derive(Debug)]
pub enum Event {
    Key(KeyCommand),
    Resize(u16, u16),
    DataLoaded(ResourceSnapshot),
}

/// The recognized logical keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyCommand {
    Quit,
    Refresh,
    /// Cycle focus forward through the four lists (Tab / Right).
    FocusNext,
    /// The alternate cycle key (Left). Also advances forward.
    FocusAlternate,
    Up,
    Down,
}

impl KeyCommand {
    /// Maps a terminal key event to a logical command, if it is bound.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyCommand::Quit)
            }
            KeyCode::Char('r') => Some(KeyCommand::Refresh),
            KeyCode::Tab | KeyCode::Right => Some(KeyCommand::FocusNext),
            KeyCode::Left => Some(KeyCommand::FocusAlternate),
            KeyCode::Up => Some(KeyCommand::Up),
            KeyCode::Down => Some(KeyCommand::Down),
            _ => None,
        }
    }
}

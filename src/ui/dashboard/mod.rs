//! Modular dashboard implementation
//!
//! State machine, layout math, row/detail formatting, and rendering split
//! into focused modules.

pub mod components;
pub mod detail;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod table;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::{Action, DashboardState};

//! Dashboard main renderer
//!
//! A pure function of the dashboard state: error and loading notices, or
//! the two-column composition (list stack on the left, detail panel on the
//! right) once data is on screen. Until the terminal size is known the
//! panels are stacked in a single column instead.

use super::components::{footer, info_panel, tables};
use super::layout::{compute_columns, detail_height};
use super::state::{DashboardState, RESOURCE_KINDS};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if let Some(error) = state.load_error() {
        render_error(f, &error.to_string());
        return;
    }
    if !state.is_ready() {
        render_loading(f);
        return;
    }
    if state.width() > 0 && state.height() > 0 {
        render_columns(f, state);
    } else {
        render_stacked(f, state);
    }
}

fn render_error(f: &mut Frame, message: &str) {
    let text = format!("\n  Error: {}\n\n  Press q to quit.", message);
    f.render_widget(Paragraph::new(text), f.area());
}

fn render_loading(f: &mut Frame) {
    f.render_widget(Paragraph::new("\n  Loading data..."), f.area());
}

fn render_columns(f: &mut Frame, state: &DashboardState) {
    let chunks =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(f.area());
    let (left_width, _) = compute_columns(state.width());
    let columns =
        Layout::horizontal([Constraint::Length(left_width), Constraint::Fill(1)]).split(chunks[0]);

    let lists = Layout::vertical([Constraint::Ratio(1, 4); 4]).split(columns[0]);
    for (area, kind) in lists.iter().zip(RESOURCE_KINDS) {
        tables::render_resource_table(f, *area, kind, state);
    }

    // Detail box height per the layout contract; the border rows sit on top
    let detail_area = Rect {
        height: columns[1]
            .height
            .min(detail_height(state.height()).saturating_add(2)),
        ..columns[1]
    };
    info_panel::render_info_panel(f, detail_area, state);
    footer::render_footer(f, chunks[1]);
}

fn render_stacked(f: &mut Frame, state: &DashboardState) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(f.area());

    for (area, kind) in chunks.iter().zip(RESOURCE_KINDS) {
        tables::render_resource_table(f, *area, kind, state);
    }
    info_panel::render_info_panel(f, chunks[4], state);
    footer::render_footer(f, chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::error::InventoryError;
    use crate::inventory::types::ImageSummary;
    use crate::snapshot::ResourceSnapshot;
    use crate::ui::events::Event;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &DashboardState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (index, cell) in buffer.content.iter().enumerate() {
            text.push_str(cell.symbol());
            if (index + 1) % width == 0 {
                text.push('\n');
            }
        }
        text
    }

    #[test]
    fn loading_state_renders_only_the_notice() {
        let state = DashboardState::new();
        let screen = draw(&state);
        assert!(screen.contains("Loading data..."));
        assert!(!screen.contains("Docker Containers"));
    }

    #[test]
    fn error_state_renders_message_and_quit_hint_without_tables() {
        let mut state = DashboardState::new();
        state.update(Event::DataLoaded(ResourceSnapshot::from_error(
            InventoryError::Http {
                status: 500,
                message: "engine unavailable".to_string(),
            },
        )));
        let screen = draw(&state);
        assert!(screen.contains("Error:"));
        assert!(screen.contains("engine unavailable"));
        assert!(screen.contains("Press q to quit."));
        assert!(!screen.contains("Docker Containers"));
        assert!(!screen.contains("Container Info"));
    }

    #[test]
    fn ready_state_renders_titles_detail_and_help() {
        let mut state = DashboardState::new();
        state.update(Event::Resize(100, 40));
        state.update(Event::DataLoaded(ResourceSnapshot {
            images: vec![ImageSummary {
                id: "sha256:aaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
                repo_tags: vec!["nginx:latest".to_string()],
                size: 104_857_600,
                ..ImageSummary::default()
            }],
            ..ResourceSnapshot::default()
        }));
        let screen = draw(&state);
        assert!(screen.contains("Docker Containers"));
        assert!(screen.contains("Docker Images"));
        assert!(screen.contains("Docker Volumes"));
        assert!(screen.contains("Docker Networks"));
        assert!(screen.contains("Container Info"));
        assert!(screen.contains("No container selected."));
        assert!(screen.contains("r: refresh"));
    }

    #[test]
    fn ready_state_without_known_size_stacks_panels() {
        let mut state = DashboardState::new();
        state.update(Event::DataLoaded(ResourceSnapshot::default()));
        let screen = draw(&state);
        assert!(screen.contains("Docker Containers"));
        assert!(screen.contains("Container Info"));
    }
}

//! Dashboard info panel component
//!
//! Renders the bordered detail box for the focused category's selection.

use crate::ui::dashboard::detail::info_body;
use crate::ui::dashboard::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render_info_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let kind = state.active_kind();
    let body = info_body(kind, state.snapshot(), state.table(kind));

    let block = Block::default()
        .title(kind.info_title())
        .title_style(
            Style::default()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Indexed(240)));

    let paragraph = Paragraph::new(body).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

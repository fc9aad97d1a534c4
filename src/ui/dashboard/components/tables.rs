//! Resource list tables
//!
//! Renders one bordered, stateful table per resource category. The focused
//! table gets the accent border and the row highlight; the cursor position
//! comes from the widget state, not from ratatui.

use crate::ui::dashboard::state::{DashboardState, ResourceKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

fn headers(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Container => &["Container ID", "Image", "Command", "Status", "Name"],
        ResourceKind::Image => &["Repository:Tag", "Image ID", "Size"],
        ResourceKind::Volume => &["Name", "Driver", "Mountpoint"],
        ResourceKind::Network => &["Name", "Network ID", "Driver", "Scope"],
    }
}

fn column_constraints(kind: ResourceKind) -> Vec<Constraint> {
    match kind {
        ResourceKind::Container => vec![
            Constraint::Length(12),
            Constraint::Length(25),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
        ResourceKind::Image => vec![
            Constraint::Length(30),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
        ResourceKind::Volume => vec![
            Constraint::Length(25),
            Constraint::Length(12),
            Constraint::Fill(1),
        ],
        ResourceKind::Network => vec![
            Constraint::Length(22),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    }
}

pub fn render_resource_table(f: &mut Frame, area: Rect, kind: ResourceKind, state: &DashboardState) {
    let widget = state.table(kind);
    let focused = widget.is_focused();

    let header = Row::new(headers(kind).iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows = widget
        .rows()
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Indexed(240))
    };
    let block = Block::default()
        .title(kind.list_title())
        .title_style(
            Style::default()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(border_style);

    let highlight = if focused {
        Style::default()
            .fg(Color::Indexed(229))
            .bg(Color::Indexed(57))
    } else {
        Style::default()
    };

    let table = Table::new(rows, column_constraints(kind))
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(highlight);

    let mut table_state = TableState::default();
    table_state.select(widget.selected());
    f.render_stateful_widget(table, area, &mut table_state);
}

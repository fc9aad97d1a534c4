//! Dashboard help footer
//!
//! Static one-line key reference below the panels.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub const HELP_TEXT: &str = "↑/↓: navigate • Tab: switch list • r: refresh • q: quit";

pub fn render_footer(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Indexed(241)));
    f.render_widget(help, area);
}

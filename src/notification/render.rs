use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{AlertSeverity, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;
const MARGIN: u16 = 1;

fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::Light => Color::White,
        AlertSeverity::Info => Color::Cyan,
        AlertSeverity::Warning => Color::Yellow,
        AlertSeverity::Danger => Color::Red,
    }
}

/// Render the current alert in the top-right corner, expiring it first
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired();
    let Some(notification) = state.current() else {
        return;
    };

    let color = severity_color(notification.severity);
    let width = (notification.message.width() as u16 + 4).min(MAX_WIDTH);
    let area: Rect = popup::top_right(frame.area(), width, 3, MARGIN);

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Line::from(notification.message.as_str()))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}

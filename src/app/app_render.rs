use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render;
use crate::notification::render_notification;
use crate::store::UserStore;
use crate::users::users_render;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, users_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        input_render::render_field(&self.search, frame, input_area);
        users_render::render_pane(&self.users, frame, users_area);
        self.render_help_line(frame, help_area);

        // Overlays last so they sit on top of the panes
        input_render::render_suggestions(&self.search, frame, input_area);
        render_notification(frame, &mut self.notification);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let text_style = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::styled(" Enter", key_style),
            Span::styled(" Search  ", text_style),
            Span::styled("↑↓", key_style),
            Span::styled(" Select  ", text_style),
            Span::styled("Tab", key_style),
            Span::styled(" Accept  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" Close/Quit ", text_style),
        ];
        if !self.users.users().is_empty() {
            spans.push(Span::styled(" Ctrl+L", key_style));
            spans.push(Span::styled(" Clear", text_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

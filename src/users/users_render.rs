//! Results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::UsersState;
use crate::store::UserStore;

const EMPTY_HINT: &str = "Type a GitHub username and press Enter to search";

/// Render the committed search results
pub fn render_pane(users: &UsersState, frame: &mut Frame, area: Rect) {
    let mut title = vec![Span::raw(" Users ")];
    if users.is_loading() {
        title.push(Span::styled(
            "(searching…) ",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(query) = users.last_query() {
        title.push(Span::styled(
            format!("({} for \"{}\") ", users.users().len(), query),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title))
        .border_style(Style::default().fg(Color::DarkGray));

    if users.users().is_empty() {
        let hint = Paragraph::new(Span::styled(EMPTY_HINT, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = users
        .users()
        .iter()
        .map(|user| {
            let mut spans = vec![Span::styled(
                user.id.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if let Some(url) = user.field_str("html_url") {
                spans.push(Span::styled(
                    format!("  {}", url),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
#[path = "users_render_tests.rs"]
mod users_render_tests;

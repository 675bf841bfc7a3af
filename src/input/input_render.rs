//! Input field and suggestion dropdown rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::highlight::{Highlight, highlight_prefix};
use super::input_state::SearchInput;
use crate::widgets::popup;

// Dropdown display constants
const MAX_POPUP_WIDTH: usize = 60;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Render the search field
pub fn render_field(search: &SearchInput, frame: &mut Frame, area: Rect) {
    frame.render_widget(&search.textarea, area);
}

/// Render the suggestion dropdown just below the input field
pub fn render_suggestions(search: &SearchInput, frame: &mut Frame, input_area: Rect) {
    let suggestions = search.visible_suggestions();
    if suggestions.is_empty() {
        return;
    }

    let popup_height = suggestions.len() as u16 + POPUP_BORDER_HEIGHT;
    let max_text_width = suggestions
        .iter()
        .map(|s| s.id.width() + 2)
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = max_text_width as u16 + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height == 0 {
        return;
    }

    let input = search.text();
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let is_selected = search.selected_index() == Some(i);
            let base = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White).bg(Color::Black)
            };
            let marker = if is_selected { "► " } else { "  " };

            let mut spans = vec![Span::styled(marker, base)];
            match highlight_prefix(&suggestion.id, input) {
                Highlight::Prefix { matched, rest } => {
                    spans.push(Span::styled(matched, base.add_modifier(Modifier::BOLD)));
                    spans.push(Span::styled(rest, base));
                }
                Highlight::Plain(id) => spans.push(Span::styled(id, base)),
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);
}

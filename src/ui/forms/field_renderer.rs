//! Field rendering utilities for forms

use order_editor::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let style = if !field.is_editable() {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    // Status selectors and read-only fields have no text cursor
    let cursor = if is_active && matches!(field.value, FieldValue::Text(_) | FieldValue::Number(_)) {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        } else {
            lines.push(Line::from(Span::styled(
                cursor,
                Style::default().fg(Color::Cyan),
            )));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Label with a required marker and the length budget
fn field_title(field: &FormField) -> String {
    let required = if field.constraint.required && field.is_editable() {
        " *"
    } else {
        ""
    };
    match field.constraint.max_length {
        Some(max) => {
            let used = field.as_text().map_or(0, |s| s.chars().count());
            format!(" {}{} ({used}/{max}) ", field.label, required)
        }
        None => format!(" {}{} ", field.label, required),
    }
}

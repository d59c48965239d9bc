//! Layout components (violations panel, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, RESET_SHORTCUT, SAVE_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into form and violations panel, keeping the last line for the status bar
pub fn create_layout(area: Rect, app: &App) -> (Rect, Rect) {
    let violation_count = app.form.violations().len() as u16;
    let panel_height = if violation_count == 0 {
        0
    } else {
        violation_count + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),               // Form
            Constraint::Length(panel_height), // Violations
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// List the fields that currently break a rule
pub fn draw_violations(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let lines: Vec<Line> = app
        .form
        .violations()
        .iter()
        .map(|v| Line::from(Span::styled(format!("• {v}"), Style::default().fg(Color::Red))))
        .collect();

    let block = Block::default()
        .title(" Problems ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.document_path()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(status_hints(), Style::default().fg(Color::DarkGray)),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        let color = if msg.starts_with("Saved") || msg.starts_with("Copied") {
            Color::Green
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

fn status_hints() -> String {
    format!(
        "Tab/↓ next  Shift+Tab/↑ prev  ←/→ status  Del clear  {SAVE_SHORTCUT} save  {RESET_SHORTCUT} reset  {COPY_SHORTCUT} copy JSON  Esc quit"
    )
}

//! Order form rendering (create and edit)

use super::field_renderer::draw_field;
use crate::app::App;
use order_editor::state::{Form, OrderField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the order form, one bordered input per field
pub fn draw_order_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let title = if app.dirty {
        format!("{}[modified] ", form.title())
    } else {
        form.title()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(if f.is_multiline { 5 } else { 3 }))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let invalid: Vec<OrderField> = form.violations().iter().map(|v| v.field()).collect();

    for (index, field) in form.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            index == form.active_field(),
            invalid.contains(&field.field),
        );
    }
}

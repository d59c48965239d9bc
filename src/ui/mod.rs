//! UI module for rendering the TUI

mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, violations_area) = layout::create_layout(frame.area(), app);

    forms::draw_order_form(frame, form_area, app);
    layout::draw_violations(frame, violations_area, app);
    layout::draw_status_bar(frame, app);
}

//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let main_area = layout::create_layout(area);

    match app.state.current_view {
        View::Form => forms::draw_contact_form(frame, main_area, app),
        View::Confirmation => confirmation::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Confetti overlays everything while it plays
    if let Some(celebration) = &app.celebration {
        confirmation::draw_confetti(frame, area, celebration);
    }
}

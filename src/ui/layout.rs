//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.state.submitting {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else if app.state.is_submitted() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Gray))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Form => {
            let on_choice = app
                .state
                .form
                .active_descriptor()
                .is_some_and(|f| f.is_choice());
            if on_choice {
                format!(
                    "←/→:option  1-9:pick  Enter:confirm  Tab:next  {}:send  Esc:quit",
                    crate::platform::SUBMIT_SHORTCUT
                )
            } else {
                format!(
                    "Tab:next  S-Tab:prev  {}/{}:send  Esc:quit",
                    crate::platform::SUBMIT_SHORTCUT,
                    crate::platform::ENTER_SUBMIT_SHORTCUT
                )
            }
        }
        View::Confirmation => "Enter/q:quit  any key:skip confetti".to_string(),
    }
}

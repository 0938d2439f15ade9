//! Contact form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::CONTACT_FIELDS;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Range of focus stops `[start, end)` that fit in `available` rows with `active` visible
pub fn visible_range(heights: &[u16], active: usize, available: u16) -> (usize, usize) {
    let active = active.min(heights.len().saturating_sub(1));

    // Scroll down just enough for the active stop to fit
    let mut start = 0;
    while start < active && heights[start..=active].iter().sum::<u16>() > available {
        start += 1;
    }

    let mut used = 0u16;
    let mut end = start;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    // Always show at least the active stop, clipped if it's taller than the screen
    (start, end.max(active + 1).min(heights.len()))
}

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Contact sales ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tip
            Constraint::Min(0),    // Fields + submit button
        ])
        .horizontal_margin(1)
        .split(inner);

    let key_style = Style::default().fg(Color::Cyan);
    let tip = Paragraph::new(Line::from(vec![
        Span::styled("Tip: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("Press "),
        Span::styled("TAB", key_style),
        Span::raw(" to advance through the form at a breakneck pace!"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(tip, chunks[0]);

    let mut heights: Vec<u16> = CONTACT_FIELDS
        .iter()
        .map(|field| field_height(field, form))
        .collect();
    heights.push(BUTTON_HEIGHT);

    let body = chunks[1];
    let (start, end) = visible_range(&heights, form.active_field(), body.height);

    let mut y = body.y;
    let bottom = body.y + body.height;
    for index in start..end {
        if y >= bottom {
            break;
        }
        let height = heights[index].min(bottom - y);
        let row = Rect {
            x: body.x,
            y,
            width: body.width,
            height,
        };
        let is_active = index == form.active_field();

        match CONTACT_FIELDS.get(index) {
            Some(field) => draw_field(frame, row, field, form, is_active),
            None => {
                let label = if app.state.submitting {
                    "Sending..."
                } else {
                    "Send message"
                };
                render_button(frame, row, label, is_active, !app.state.submitting);
            }
        }
        y += height;
    }
}

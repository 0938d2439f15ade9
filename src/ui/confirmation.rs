//! Confirmation view and confetti overlay

use crate::app::App;
use crate::state::CelebrationState;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Confetti colors, indexed by `ConfettiPiece::color`
const PALETTE: [Color; CelebrationState::PALETTE_SIZE] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Draw the "message received" panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [panel] = Layout::vertical([Constraint::Length(10)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(panel);

    let content = vec![
        Line::from(vec![
            Span::raw("✅ "),
            Span::styled(
                "Message received!",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(
            "A member of the PostHog team will get back to you as soon as we've had a chance to review your information.",
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("In the mean time, why not join our Slack community? "),
            Span::styled(
                app.config.community_url(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );
    frame.render_widget(paragraph, panel);
}

/// Paint confetti pieces directly into the frame buffer
pub fn draw_confetti(frame: &mut Frame, area: Rect, celebration: &CelebrationState) {
    let buffer = frame.buffer_mut();
    for piece in celebration.pieces(area.width, area.height) {
        if let Some(cell) = buffer.cell_mut((area.x + piece.x, area.y + piece.y)) {
            cell.set_char(piece.glyph).set_fg(PALETTE[piece.color]);
        }
    }
}

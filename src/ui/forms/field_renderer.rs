//! Field rendering utilities for the contact form

use crate::state::{is_required, ContactForm, FieldDescriptor, FieldKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows used by a multi-line field's content, bounded to keep the form navigable
const TEXT_AREA_MIN_LINES: u16 = 2;
const TEXT_AREA_MAX_LINES: u16 = 6;

/// Option columns in an open choice group
const OPTION_COLUMNS: usize = 2;

/// Height in rows a field needs, including its border
pub fn field_height(field: &FieldDescriptor, form: &ContactForm) -> u16 {
    let content = match field.kind {
        FieldKind::Text => 1,
        FieldKind::TextArea => {
            let lines = form
                .value(field.name)
                .map(|v| v.split('\n').count())
                .unwrap_or(1) as u16;
            lines.clamp(TEXT_AREA_MIN_LINES, TEXT_AREA_MAX_LINES)
        }
        FieldKind::Choice if form.is_open(field.name) => {
            // Tip line plus option grid
            1 + field.options.len().div_ceil(OPTION_COLUMNS) as u16
        }
        FieldKind::Choice => 1,
    };
    content + 2
}

/// Draw a field, dispatching on its input variant
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    form: &ContactForm,
    is_active: bool,
) {
    let content = match field.kind {
        FieldKind::Text | FieldKind::TextArea => text_content(field, form, is_active),
        FieldKind::Choice => choice_content(field, form, is_active),
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(field_block(field, form.error(field.name), is_active)),
        area,
    );
}

/// Bordered block titled with the placeholder, error text on the bottom border
fn field_block<'a>(field: &FieldDescriptor, error: Option<&'a str>, is_active: bool) -> Block<'a> {
    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let marker = if is_required(field.name) { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", field.placeholder, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    block
}

fn text_content<'a>(field: &FieldDescriptor, form: &'a ContactForm, is_active: bool) -> Paragraph<'a> {
    let value = form.value(field.name).unwrap_or_default();
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    if value.is_empty() && !is_active {
        let hint = match field.input_type {
            "email" => "name@company.com",
            _ => field.placeholder,
        };
        return Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l, style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    // Keep the tail of long text visible
    let visible = if field.is_multiline() {
        TEXT_AREA_MAX_LINES as usize
    } else {
        1
    };
    let skip = lines.len().saturating_sub(visible);
    Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
}

fn choice_content<'a>(field: &FieldDescriptor, form: &ContactForm, is_active: bool) -> Paragraph<'a> {
    let selected = form.selected_option(field);

    if !form.is_open(field.name) {
        let summary = match selected {
            Some(i) => Span::styled(field.options[i].display(), Style::default().fg(Color::Gray)),
            None => Span::styled("Tab here to choose", Style::default().fg(Color::DarkGray)),
        };
        return Paragraph::new(Line::from(summary));
    }

    let key_style = Style::default().fg(Color::Cyan);
    let mut lines = vec![Line::from(vec![
        Span::styled("Tip: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("Use "),
        Span::styled("←", key_style),
        Span::raw(" "),
        Span::styled("→", key_style),
        Span::raw(" to advance through options, "),
        Span::styled("Enter", key_style),
        Span::raw(" to confirm"),
    ])
    .style(Style::default().fg(Color::DarkGray))];

    for (row, chunk) in field.options.chunks(OPTION_COLUMNS).enumerate() {
        let mut spans = Vec::new();
        for (col, option) in chunk.iter().enumerate() {
            let index = row * OPTION_COLUMNS + col;
            let is_selected = selected == Some(index);
            let style = match (is_selected, is_active) {
                (true, true) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(Color::White),
                (false, _) => Style::default().fg(Color::DarkGray),
            };
            let bullet = if is_selected { "●" } else { "○" };
            spans.push(Span::styled(
                format!("{bullet} {}. {:<28}", index + 1, option.display()),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines)
}

//! Question card
//!
//! Renders the current input step: the question, the numeric input, the
//! preset row on the deficit step, and the inline error message.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{DeficitPreset, InputStep};
use crate::tui::app::{App, DeficitFocus};

/// Render the question card for the active input step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(step) = app.wizard.input_step() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Padding
            Constraint::Length(2), // Question
            Constraint::Length(1), // Padding
            Constraint::Length(3), // Presets (deficit step only)
            Constraint::Length(2), // Input
            Constraint::Length(1), // Padding
            Constraint::Min(1),    // Error
        ])
        .split(inner);

    let question = Paragraph::new(step.question())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(question, chunks[1]);

    if step == InputStep::Deficit {
        render_presets(frame, app, chunks[3]);
    }

    let input_width = 24.min(chunks[4].width);
    let input_area = Rect::new(
        chunks[4].x + (chunks[4].width - input_width) / 2,
        chunks[4].y,
        input_width,
        chunks[4].height,
    );
    frame.render_widget(app.input.clone(), input_area);

    if let Some(message) = app.wizard.error_message() {
        let error = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[6]);
    }
}

/// Render the three preset buttons side by side
fn render_presets(frame: &mut Frame, app: &App, area: Rect) {
    let button_width = 11;
    let gap = 2;
    let total = button_width * 3 + gap * 2;
    let start = area.x + area.width.saturating_sub(total) / 2;

    for preset in DeficitPreset::all() {
        let x = start + preset.index() as u16 * (button_width + gap);
        if x + button_width > area.x + area.width {
            break;
        }
        let button_area = Rect::new(x, area.y, button_width, area.height.min(3));

        let selected = app.wizard.selected_preset() == Some(*preset);
        let highlighted =
            app.deficit_focus == DeficitFocus::Presets && app.preset_cursor == *preset;

        let (text_style, border_style) = if selected {
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else if highlighted {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", preset),
            text_style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(button, button_area);
    }
}

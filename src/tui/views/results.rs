//! Results card
//!
//! Shows the fat to lose, the number of days, the goal date and the
//! disclaimer once the wizard is complete.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::format_estimate_lines;
use crate::models::DISCLAIMER;
use crate::tui::app::App;

/// Render the results card
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(estimate) = app.wizard.estimate() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your Results",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for text in format_estimate_lines(estimate, app.goal_date()) {
        lines.push(Line::from(Span::styled(text, Style::default().fg(Color::White))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        DISCLAIMER,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

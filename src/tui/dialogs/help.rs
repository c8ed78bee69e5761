//! Help dialog
//!
//! Shows keyboard shortcuts for the wizard

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the current step
fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Navigation"),
        Line::from(""),
        key_line("Enter", "Next step"),
        key_line("Esc", "Previous step"),
        key_line("q / Ctrl+c", "Quit"),
        key_line("?", "Show/hide help"),
        Line::from(""),
    ];

    if app.wizard.is_complete() {
        lines.push(section("Results"));
        lines.push(Line::from(""));
        lines.push(key_line("r / Enter", "Start over"));
    } else {
        lines.push(section("Entering values"));
        lines.push(Line::from(""));
        lines.push(key_line("0-9 .", "Type a number"));
        lines.push(key_line("Backspace/Del", "Delete a character"));
        lines.push(key_line("Home/End", "Jump to start/end"));
        lines.push(key_line("Ctrl+u", "Clear the value"));
        lines.push(Line::from(""));
        lines.push(section("Calorie deficit step"));
        lines.push(Line::from(""));
        lines.push(key_line("←/→ h/l", "Pick 300, 500 or 700 kcal"));
        lines.push(key_line("Space", "Use the highlighted preset"));
        lines.push(key_line("Tab", "Switch between presets and custom value"));
    }

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}

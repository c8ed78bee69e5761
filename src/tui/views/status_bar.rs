//! Status bar view
//!
//! Shows the current step, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::InputStep;
use crate::tui::app::{App, DeficitFocus};

/// Key hints for the current state
pub fn key_hints(app: &App) -> &'static str {
    match app.wizard.input_step() {
        None => " Enter/r:Start over  Esc:Back  q:Quit  ?:Help ",
        Some(InputStep::Deficit) => match app.deficit_focus {
            DeficitFocus::Presets => " ←/→:Preset  Tab:Custom  Enter:Next  Esc:Back  ?:Help ",
            DeficitFocus::Custom => " Tab:Presets  Enter:Next  Esc:Back  ?:Help ",
        },
        Some(InputStep::Weight) => " Enter:Next  q:Quit  ?:Help ",
        Some(_) => " Enter:Next  Esc:Back  q:Quit  ?:Help ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let step_label = match app.wizard.input_step() {
        Some(step) => step.to_string(),
        None => "Results".to_string(),
    };
    spans.push(Span::styled(
        format!(" {} ", step_label),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let next_style = if app.wizard.can_advance() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if !app.wizard.is_complete() {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled("next ▶", next_style));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_line(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..100u16).map(|x| buf[(x, 0u16)].symbol()).collect()
    }

    #[test]
    fn test_hints_follow_step() {
        let mut app = App::new(&Settings::default());
        assert!(!key_hints(&app).contains("Esc"));

        app.type_char('8');
        app.next();
        assert!(key_hints(&app).contains("Esc:Back"));
    }

    #[test]
    fn test_deficit_hints_follow_focus() {
        let mut app = App::new(&Settings::default());
        for text in ["80", "25", "5"] {
            for c in text.chars() {
                app.type_char(c);
            }
            app.next();
        }
        assert!(key_hints(&app).contains("Tab:Custom"));
        app.toggle_deficit_focus();
        assert!(key_hints(&app).contains("Tab:Presets"));
    }

    #[test]
    fn test_render_shows_step_and_status() {
        let mut app = App::new(&Settings::default());
        app.set_status("Saved");
        let line = draw_line(&app);

        assert!(line.contains("Step 1: Weight"));
        assert!(line.contains("Saved"));
        assert!(line.contains("?:Help"));
    }
}

//! TUI Views module
//!
//! Contains the wizard views: the question card for input steps, the results
//! card, and the status bar.

pub mod question;
pub mod results;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::models::TOTAL_STEPS;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);
    render_progress(frame, app, layout.progress);

    if app.wizard.is_complete() {
        results::render(frame, app, layout.card);
    } else {
        question::render(frame, app, layout.card);
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![Span::styled(
        "Body Fat Loss Calculator",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(header, area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step().number();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .percent(app.wizard.progress_percent())
        .label(format!("Step {} of {}", step, TOTAL_STEPS));

    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::DeficitPreset;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 30;

    fn draw(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..HEIGHT)
            .map(|y| (0..WIDTH).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn screen(buf: &Buffer) -> String {
        rows(buf).join("\n")
    }

    /// Cell position of the first occurrence of `needle`
    fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        rows(buf).iter().enumerate().find_map(|(y, row)| {
            row.find(needle)
                .map(|idx| (row[..idx].chars().count() as u16, y as u16))
        })
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    fn to_deficit_step(app: &mut App) {
        type_str(app, "80");
        app.next();
        type_str(app, "25");
        app.next();
        type_str(app, "5");
        app.next();
    }

    #[test]
    fn test_first_step_screen() {
        let mut app = App::new(&Settings::default());
        let text = screen(&draw(&mut app));

        assert!(text.contains("Body Fat Loss Calculator"));
        assert!(text.contains("Step 1 of 5"));
        assert!(text.contains("What is your current body weight (kg)?"));
        assert!(text.contains("Step 1: Weight"));
    }

    #[test]
    fn test_error_line_is_red() {
        let mut app = App::new(&Settings::default());
        app.next();
        let buf = draw(&mut app);

        let (x, y) = find(&buf, "Please enter a valid weight").expect("error line drawn");
        assert_eq!(buf[(x, y)].fg, Color::Red);
    }

    #[test]
    fn test_no_error_line_before_next() {
        let mut app = App::new(&Settings::default());
        let text = screen(&draw(&mut app));
        assert!(!text.contains("Please enter"));
    }

    #[test]
    fn test_preset_row_marks_selection() {
        let mut app = App::new(&Settings::default());
        to_deficit_step(&mut app);
        app.select_preset(DeficitPreset::Aggressive);
        let buf = draw(&mut app);
        let text = screen(&buf);

        assert!(text.contains("Step 4 of 5"));
        // The button row sits above the input, so the first match is the button
        let (x, y) = find(&buf, "700").expect("700 button drawn");
        assert_eq!(buf[(x, y)].bg, Color::White);

        let (x, y) = find(&buf, "300").expect("300 button drawn");
        assert_ne!(buf[(x, y)].bg, Color::White);
        assert!(find(&buf, "500").is_some());
    }

    #[test]
    fn test_results_card() {
        let mut app = App::new(&Settings::default());
        app.today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        to_deficit_step(&mut app);
        app.select_preset(DeficitPreset::Moderate);
        app.next();
        let text = screen(&draw(&mut app));

        assert!(text.contains("Step 5 of 5"));
        assert!(text.contains("Your Results"));
        assert!(text.contains("Fat to lose: 5 kg"));
        assert!(text.contains("Estimated days to goal: 77 days"));
        assert!(text.contains("Goal date: 2025-03-19"));
        assert!(text.contains("This is a rough estimate."));
    }

    #[test]
    fn test_results_without_goal_date() {
        let settings = Settings {
            show_goal_date: false,
            ..Settings::default()
        };
        let mut app = App::new(&settings);
        to_deficit_step(&mut app);
        app.select_preset(DeficitPreset::Moderate);
        app.next();
        let text = screen(&draw(&mut app));

        assert!(text.contains("Estimated days to goal: 77 days"));
        assert!(!text.contains("Goal date"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(&Settings::default());
        app.toggle_help();
        let text = screen(&draw(&mut app));
        assert!(text.contains("Help"));
        assert!(text.contains("Type a number"));
    }
}

//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, progress bar, wizard card,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the wizard card
const CARD_WIDTH: u16 = 64;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title bar at the top
    pub header: Rect,
    /// Step progress gauge
    pub progress: Rect,
    /// Centered card holding the current step
    pub card: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Progress
                Constraint::Min(8),    // Card
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let card_width = CARD_WIDTH.min(vertical[2].width);
        let card = Rect::new(
            vertical[2].x + (vertical[2].width - card_width) / 2,
            vertical[2].y + 1.min(vertical[2].height),
            card_width,
            vertical[2].height.saturating_sub(1),
        );

        let progress_width = CARD_WIDTH.min(vertical[1].width);
        let progress = Rect::new(
            vertical[1].x + (vertical[1].width - progress_width) / 2,
            vertical[1].y,
            progress_width,
            vertical[1].height,
        );

        Self {
            header: vertical[0],
            progress,
            card,
            status_bar: vertical[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

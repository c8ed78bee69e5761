//! Application state for the TUI
//!
//! The App struct holds the wizard plus the presentation state needed for
//! rendering and handling events: the text being typed, which control on the
//! deficit step has focus, and whether the help overlay is open.

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::models::{DeficitPreset, InputStep};
use crate::wizard::Wizard;

use super::widgets::NumberInput;

/// Ticks a status message stays visible
const STATUS_TICKS: u8 = 12;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Which control on the deficit step has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeficitFocus {
    #[default]
    Presets,
    Custom,
}

/// Main application state
pub struct App {
    /// The calculator wizard
    pub wizard: Wizard,

    /// Text being typed for the current input step
    pub input: NumberInput,

    /// Focused control on the deficit step
    pub deficit_focus: DeficitFocus,

    /// Highlighted preset button
    pub preset_cursor: DeficitPreset,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether results include the goal date
    pub show_goal_date: bool,

    /// Day the plan starts, used for the goal date
    pub today: NaiveDate,

    /// Status message to display
    pub status_message: Option<String>,

    status_ticks: u8,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: &Settings) -> Self {
        let mut app = Self {
            wizard: Wizard::with_energy_density(settings.kcal_per_kg_fat),
            input: NumberInput::new(),
            deficit_focus: DeficitFocus::default(),
            preset_cursor: DeficitPreset::Moderate,
            active_dialog: ActiveDialog::default(),
            should_quit: false,
            show_goal_date: settings.show_goal_date,
            today: Local::now().date_naive(),
            status_message: None,
            status_ticks: 0,
        };
        app.sync_input();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message that expires after a few ticks
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Advance timers; called on every tick event
    pub fn on_tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.active_dialog = match self.active_dialog {
            ActiveDialog::Help => ActiveDialog::None,
            ActiveDialog::None => ActiveDialog::Help,
        };
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Load the text input from the wizard's value for the current step
    pub fn sync_input(&mut self) {
        let Some(step) = self.wizard.input_step() else {
            self.input = NumberInput::new();
            return;
        };

        // The text must parse back to the stored value
        let content = self
            .wizard
            .raw(step)
            .map(|value| value.to_string())
            .unwrap_or_default();
        self.input = NumberInput::new()
            .placeholder(step.placeholder())
            .unit(step.unit());
        self.input.set_content(content);

        if step == InputStep::Deficit {
            self.deficit_focus = match self.wizard.selected_preset() {
                Some(preset) => {
                    self.preset_cursor = preset;
                    DeficitFocus::Presets
                }
                None if self.wizard.raw(step).is_some() => DeficitFocus::Custom,
                None => DeficitFocus::Presets,
            };
        }
        self.input.focused = self.typing_focused();
    }

    /// Whether keystrokes go to the text input
    pub fn typing_focused(&self) -> bool {
        match self.wizard.input_step() {
            Some(InputStep::Deficit) => self.deficit_focus == DeficitFocus::Custom,
            Some(_) => true,
            None => false,
        }
    }

    /// Push the typed text into the wizard
    fn commit_input(&mut self) {
        if let Some(step) = self.wizard.input_step() {
            self.wizard.set_input_text(step, self.input.value());
        }
    }

    /// Type a character into the current input
    pub fn type_char(&mut self, c: char) {
        if self.wizard.input_step() == Some(InputStep::Deficit)
            && self.deficit_focus == DeficitFocus::Presets
        {
            if !c.is_ascii_digit() && c != '.' {
                return;
            }
            // Typing over a preset starts a custom value
            self.focus_custom();
            self.input.clear();
        }
        if self.input.insert(c) {
            self.commit_input();
        }
    }

    pub fn backspace(&mut self) {
        if self.typing_focused() && self.input.backspace() {
            self.commit_input();
        }
    }

    pub fn delete(&mut self) {
        if self.typing_focused() && self.input.delete() {
            self.commit_input();
        }
    }

    /// Use `preset` as the deficit and highlight it
    pub fn select_preset(&mut self, preset: DeficitPreset) {
        self.wizard.select_preset(preset);
        self.preset_cursor = preset;
        self.deficit_focus = DeficitFocus::Presets;
        self.input.set_content(preset.to_string());
        self.input.focused = false;
    }

    pub fn next_preset(&mut self) {
        self.select_preset(self.preset_cursor.next());
    }

    pub fn prev_preset(&mut self) {
        self.select_preset(self.preset_cursor.prev());
    }

    /// Move focus to the custom deficit entry
    pub fn focus_custom(&mut self) {
        self.deficit_focus = DeficitFocus::Custom;
        self.input.focused = true;
    }

    /// Move focus to the preset row
    pub fn focus_presets(&mut self) {
        self.deficit_focus = DeficitFocus::Presets;
        self.input.focused = false;
    }

    /// Switch focus between the preset row and the custom entry
    pub fn toggle_deficit_focus(&mut self) {
        match self.deficit_focus {
            DeficitFocus::Presets => self.focus_custom(),
            DeficitFocus::Custom => self.focus_presets(),
        }
    }

    /// Validate the current step and move forward
    pub fn next(&mut self) {
        if self.wizard.advance().is_ok() {
            self.sync_input();
            if let Some(estimate) = self.wizard.estimate() {
                let days = estimate.days_to_goal;
                self.set_status(format!("Estimate ready: {} days", days));
            }
        }
    }

    /// Go to the previous step
    pub fn back(&mut self) {
        if self.wizard.can_go_back() {
            self.wizard.go_back();
            self.sync_input();
        }
    }

    /// Start over from step 1
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.preset_cursor = DeficitPreset::Moderate;
        self.clear_status();
        self.sync_input();
    }

    /// Goal date for the current estimate, if shown
    pub fn goal_date(&self) -> Option<NaiveDate> {
        if !self.show_goal_date {
            return None;
        }
        self.wizard
            .estimate()
            .and_then(|estimate| estimate.goal_date(self.today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn test_typing_updates_wizard() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "80.5");
        assert_eq!(app.wizard.raw(InputStep::Weight), Some(80.5));
        assert!(app.wizard.can_advance());

        app.backspace();
        app.backspace();
        assert_eq!(app.input.value(), "80");
        assert_eq!(app.wizard.raw(InputStep::Weight), Some(80.0));
    }

    #[test]
    fn test_walk_through_to_results() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "80");
        app.next();
        type_str(&mut app, "25");
        app.next();
        type_str(&mut app, "5");
        app.next();
        assert_eq!(app.wizard.input_step(), Some(InputStep::Deficit));
        assert!(!app.typing_focused());

        app.select_preset(DeficitPreset::Moderate);
        app.next();

        assert!(app.wizard.is_complete());
        assert_eq!(app.wizard.estimate().map(|e| e.days_to_goal), Some(77));
        assert!(app.status_message.is_some());
        assert!(app.goal_date().is_some());
    }

    #[test]
    fn test_back_restores_typed_value() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "72.5");
        app.next();
        app.back();
        assert_eq!(app.input.value(), "72.5");
        assert!(app.input.focused);
    }

    #[test]
    fn test_back_shows_exact_stored_value() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "80.125");
        app.next();
        app.back();
        assert_eq!(app.input.value(), "80.125");
        assert_eq!(app.wizard.raw(InputStep::Weight), Some(80.125));

        // Editing after going back starts from the full value
        app.backspace();
        assert_eq!(app.wizard.raw(InputStep::Weight), Some(80.12));
    }

    #[test]
    fn test_back_keeps_small_values_visible() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "0.001");
        app.next();
        app.back();
        assert_eq!(app.input.value(), "0.001");

        type_str(&mut app, "5");
        assert_eq!(app.input.value(), "0.0015");
        assert_eq!(app.wizard.raw(InputStep::Weight), Some(0.0015));
    }

    #[test]
    fn test_invalid_next_shows_error() {
        let mut app = App::new(&Settings::default());
        app.next();
        assert_eq!(app.wizard.step().number(), 1);
        assert_eq!(app.wizard.error_message(), Some("Please enter a valid weight"));
    }

    #[test]
    fn test_typing_over_presets_switches_to_custom() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "80");
        app.next();
        type_str(&mut app, "25");
        app.next();
        type_str(&mut app, "5");
        app.next();

        app.next_preset();
        assert_eq!(app.wizard.selected_preset(), Some(DeficitPreset::Aggressive));

        type_str(&mut app, "450");
        assert_eq!(app.deficit_focus, DeficitFocus::Custom);
        assert_eq!(app.wizard.selected_preset(), None);
        assert_eq!(app.wizard.raw(InputStep::Deficit), Some(450.0));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = App::new(&Settings::default());
        type_str(&mut app, "80");
        app.next();
        app.reset();
        assert_eq!(app.wizard, Wizard::new());
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_status_expires() {
        let mut app = App::new(&Settings::default());
        app.set_status("hello");
        for _ in 0..STATUS_TICKS {
            app.on_tick();
        }
        assert!(app.status_message.is_none());
    }
}

//! Line-prompt wizard
//!
//! Drives the calculator wizard through plain stdin/stdout prompts, for
//! terminals where the full-screen interface is not wanted.

use chrono::Local;
use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::format_estimate_text;
use crate::error::FatLossResult;
use crate::models::{DeficitPreset, Estimate, InputStep, WizardStep, TOTAL_STEPS};
use crate::wizard::Wizard;

/// How a prompt session ended
#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    /// The user finished the wizard; holds the last estimate shown
    Completed(Estimate),
    /// The user quit (or input ended) before reaching the results
    Quit,
}

/// Prompt-driven front end for the wizard
pub struct PromptWizard<R, W> {
    input: R,
    output: W,
    wizard: Wizard,
    show_goal_date: bool,
}

impl<R: BufRead, W: Write> PromptWizard<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            input,
            output,
            wizard: Wizard::with_energy_density(settings.kcal_per_kg_fat),
            show_goal_date: settings.show_goal_date,
        }
    }

    /// Run the wizard until the user quits or declines to start again
    pub fn run(&mut self) -> FatLossResult<PromptOutcome> {
        writeln!(self.output)?;
        writeln!(self.output, "===========================================")?;
        writeln!(self.output, "  Body Fat Loss Calculator")?;
        writeln!(self.output, "===========================================")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter 'b' to go back, 'r' to start over, 'q' to quit."
        )?;

        loop {
            let step = *self.wizard.step();
            match step {
                WizardStep::Input(step) => {
                    if !self.prompt_step(step)? {
                        return Ok(PromptOutcome::Quit);
                    }
                }
                WizardStep::Results(estimate) => {
                    self.show_results(&estimate)?;
                    let again = self.prompt("Start again? (yes/no, 'b' to go back) [no]: ")?;
                    match again.as_deref().map(str::to_lowercase).as_deref() {
                        Some("y") | Some("yes") => self.wizard.reset(),
                        Some("b") | Some("back") => self.wizard.go_back(),
                        _ => return Ok(PromptOutcome::Completed(estimate)),
                    }
                }
            }
        }
    }

    /// Ask the question for `step` and apply the answer.
    ///
    /// Returns `false` when the user quits or input ends.
    fn prompt_step(&mut self, step: InputStep) -> FatLossResult<bool> {
        writeln!(self.output)?;
        writeln!(self.output, "Step {} of {}", step.number(), TOTAL_STEPS)?;
        writeln!(self.output, "{}", step.question())?;
        if step == InputStep::Deficit {
            let presets: Vec<String> = DeficitPreset::all().iter().map(|p| p.to_string()).collect();
            writeln!(
                self.output,
                "Presets: {} (or enter a custom value)",
                presets.join(" / ")
            )?;
        }

        let current = self.wizard.raw(step);
        let prompt = match current {
            Some(value) => format!("{} [{}]: ", step.unit(), value),
            None => format!("{} ({}): ", step.unit(), step.placeholder()),
        };

        let Some(answer) = self.prompt(&prompt)? else {
            return Ok(false);
        };

        match answer.to_lowercase().as_str() {
            "q" | "quit" => return Ok(false),
            "b" | "back" => {
                self.wizard.go_back();
                return Ok(true);
            }
            "r" | "reset" => {
                self.wizard.reset();
                return Ok(true);
            }
            // Keep the value already entered
            "" if current.is_some() => {}
            _ => self.apply_answer(step, &answer),
        }

        if self.wizard.advance().is_err() {
            if let Some(message) = self.wizard.error_message() {
                writeln!(self.output, "{}", message)?;
            }
        }
        Ok(true)
    }

    fn apply_answer(&mut self, step: InputStep, answer: &str) {
        if step == InputStep::Deficit {
            let preset = DeficitPreset::all()
                .iter()
                .find(|p| p.to_string() == answer.trim());
            if let Some(preset) = preset {
                self.wizard.select_preset(*preset);
                return;
            }
        }
        self.wizard.set_input_text(step, answer);
    }

    fn show_results(&mut self, estimate: &Estimate) -> FatLossResult<()> {
        let goal_date = if self.show_goal_date {
            estimate.goal_date(Local::now().date_naive())
        } else {
            None
        };

        writeln!(self.output)?;
        writeln!(self.output, "Your Results")?;
        writeln!(self.output, "============")?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", format_estimate_text(estimate, goal_date))?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> FatLossResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

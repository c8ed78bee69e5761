//! Wizard controller
//!
//! Owns the wizard state and exposes the only transitions allowed on it:
//! entering values, picking a preset, moving forward and back, and resetting.

use tracing::{debug, info, warn};

use crate::models::{
    DeficitPreset, Estimate, InputError, InputStep, RawInputs, WizardStep, KCAL_PER_KG_FAT,
    TOTAL_STEPS,
};

/// State machine behind the body fat calculator
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    inputs: RawInputs,
    selected_preset: Option<DeficitPreset>,
    error_message: Option<String>,
    kcal_per_kg_fat: f64,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Create a wizard at step 1 with every field empty
    pub fn new() -> Self {
        Self::with_energy_density(KCAL_PER_KG_FAT)
    }

    /// Create a wizard that converts fat mass to energy at `kcal_per_kg_fat`
    pub fn with_energy_density(kcal_per_kg_fat: f64) -> Self {
        Self {
            step: WizardStep::default(),
            inputs: RawInputs::default(),
            selected_preset: None,
            error_message: None,
            kcal_per_kg_fat,
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// The input step being edited, or `None` on the results step
    pub fn input_step(&self) -> Option<InputStep> {
        self.step.input()
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// The stored value for `step`
    pub fn raw(&self, step: InputStep) -> Option<f64> {
        self.inputs.get(step)
    }

    pub fn selected_preset(&self) -> Option<DeficitPreset> {
        self.selected_preset
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The computed estimate, present only on the results step
    pub fn estimate(&self) -> Option<&Estimate> {
        self.step.estimate()
    }

    pub fn kcal_per_kg_fat(&self) -> f64 {
        self.kcal_per_kg_fat
    }

    /// Store the value owned by `step` and clear the current error.
    ///
    /// Typing a deficit by hand deselects any preset.
    pub fn set_input(&mut self, step: InputStep, value: Option<f64>) {
        self.inputs.set(step, value);
        if step == InputStep::Deficit {
            self.selected_preset = None;
        }
        self.error_message = None;
    }

    /// Parse `text` and store it for `step`.
    ///
    /// Empty or unparsable text leaves the field empty.
    pub fn set_input_text(&mut self, step: InputStep, text: &str) {
        let value = text.trim().parse::<f64>().ok();
        self.set_input(step, value);
    }

    /// Use a preset as the daily deficit
    pub fn select_preset(&mut self, preset: DeficitPreset) {
        self.inputs.set(InputStep::Deficit, Some(preset.value()));
        self.selected_preset = Some(preset);
        self.error_message = None;
    }

    /// Whether the value for `step` passes that step's rule
    pub fn is_valid(&self, step: InputStep) -> bool {
        self.inputs.is_valid(step)
    }

    /// Whether the "next" action should be enabled
    pub fn can_advance(&self) -> bool {
        self.input_step().is_some_and(|step| self.is_valid(step))
    }

    pub fn can_go_back(&self) -> bool {
        self.step.number() > 1
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_results()
    }

    /// Validate the current step and move forward.
    ///
    /// On failure the step's message becomes the current error and the step
    /// does not change. Passing the deficit step computes the estimate and
    /// moves to the results step. Does nothing on the results step.
    pub fn advance(&mut self) -> Result<(), InputError> {
        let Some(step) = self.input_step() else {
            return Ok(());
        };

        if let Err(err) = self.inputs.validate(step) {
            warn!(step = step.number(), "step validation failed");
            self.error_message = Some(err.to_string());
            return Err(err);
        }

        match step.next() {
            Some(next) => {
                debug!(from = step.number(), to = next.number(), "advancing");
                self.step = WizardStep::Input(next);
                self.error_message = None;
                Ok(())
            }
            None => match self.compute() {
                Ok(estimate) => {
                    info!(
                        fat_to_lose_kg = estimate.fat_to_lose_kg,
                        days_to_goal = estimate.days_to_goal,
                        "estimate computed"
                    );
                    self.step = WizardStep::Results(estimate);
                    self.error_message = None;
                    Ok(())
                }
                Err(err) => {
                    // An earlier field was changed after its step was passed.
                    warn!(step = err.step().number(), "earlier step no longer valid");
                    self.error_message = Some(err.to_string());
                    Err(err)
                }
            },
        }
    }

    /// Move to the previous step, keeping entered values
    pub fn go_back(&mut self) {
        let previous = match self.step {
            WizardStep::Input(step) => step.prev(),
            WizardStep::Results(_) => Some(InputStep::Deficit),
        };
        if let Some(previous) = previous {
            debug!(from = self.step.number(), to = previous.number(), "going back");
            self.step = WizardStep::Input(previous);
            self.error_message = None;
        }
    }

    /// Clear every field, the error and the result, and return to step 1
    pub fn reset(&mut self) {
        debug!("resetting wizard");
        *self = Self::with_energy_density(self.kcal_per_kg_fat);
    }

    /// Compute the estimate from the current values.
    ///
    /// Fails with the first invalid step's error rather than dividing by
    /// zero when the target body fat would reach 100%.
    pub fn compute(&self) -> Result<Estimate, InputError> {
        let inputs = self.inputs.complete()?;
        Ok(Estimate::compute_with(&inputs, self.kcal_per_kg_fat))
    }

    /// Progress through the wizard as a percentage (0 on step 1, 100 on results)
    pub fn progress_percent(&self) -> u16 {
        let done = u16::from(self.step.number() - 1);
        done * 100 / u16::from(TOTAL_STEPS - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_to_results(wizard: &mut Wizard) {
        wizard.set_input(InputStep::Weight, Some(80.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::BodyFat, Some(25.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::TargetDrop, Some(5.0));
        wizard.advance().unwrap();
        wizard.select_preset(DeficitPreset::Moderate);
        wizard.advance().unwrap();
    }

    #[test]
    fn test_new_wizard_is_empty() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step().number(), 1);
        assert_eq!(wizard.inputs(), &RawInputs::default());
        assert!(wizard.estimate().is_none());
        assert!(wizard.error_message().is_none());
        assert!(!wizard.can_go_back());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_full_run_reaches_results() {
        let mut wizard = Wizard::new();
        fill_to_results(&mut wizard);

        assert!(wizard.is_complete());
        assert_eq!(wizard.step().number(), 5);
        let estimate = wizard.estimate().unwrap();
        assert_eq!(estimate.fat_to_lose_kg, 5.0);
        assert_eq!(estimate.days_to_goal, 77);
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn test_invalid_advance_sets_error_and_stays() {
        let mut wizard = Wizard::new();
        wizard.set_input(InputStep::Weight, Some(0.0));

        assert_eq!(wizard.advance(), Err(InputError::Weight));
        assert_eq!(wizard.input_step(), Some(InputStep::Weight));
        assert_eq!(wizard.error_message(), Some("Please enter a valid weight"));
    }

    #[test]
    fn test_input_clears_error() {
        let mut wizard = Wizard::new();
        let _ = wizard.advance();
        assert!(wizard.error_message().is_some());

        wizard.set_input(InputStep::Weight, Some(70.0));
        assert!(wizard.error_message().is_none());
    }

    #[test]
    fn test_drop_not_below_body_fat_is_rejected() {
        let mut wizard = Wizard::new();
        wizard.set_input(InputStep::Weight, Some(80.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::BodyFat, Some(20.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::TargetDrop, Some(20.0));

        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Err(InputError::TargetDrop));
        assert_eq!(wizard.step().number(), 3);
    }

    #[test]
    fn test_back_then_forward_preserves_values() {
        let mut wizard = Wizard::new();
        wizard.set_input(InputStep::Weight, Some(80.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::BodyFat, Some(25.0));
        wizard.advance().unwrap();

        wizard.go_back();
        wizard.go_back();
        assert_eq!(wizard.step().number(), 1);
        assert_eq!(wizard.raw(InputStep::Weight), Some(80.0));

        wizard.advance().unwrap();
        assert_eq!(wizard.raw(InputStep::BodyFat), Some(25.0));
        wizard.advance().unwrap();
        assert_eq!(wizard.input_step(), Some(InputStep::TargetDrop));
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let mut wizard = Wizard::new();
        wizard.go_back();
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn test_back_from_results_drops_estimate() {
        let mut wizard = Wizard::new();
        fill_to_results(&mut wizard);

        wizard.go_back();
        assert_eq!(wizard.input_step(), Some(InputStep::Deficit));
        assert!(wizard.estimate().is_none());
        assert_eq!(wizard.selected_preset(), Some(DeficitPreset::Moderate));
        assert_eq!(wizard.raw(InputStep::Deficit), Some(500.0));
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut wizard = Wizard::new();
        fill_to_results(&mut wizard);
        wizard.reset();
        assert_eq!(wizard, Wizard::new());

        let mut wizard = Wizard::with_energy_density(7000.0);
        wizard.set_input(InputStep::Weight, Some(-1.0));
        let _ = wizard.advance();
        wizard.reset();
        assert_eq!(wizard, Wizard::with_energy_density(7000.0));
    }

    #[test]
    fn test_custom_deficit_deselects_preset() {
        let mut wizard = Wizard::new();
        wizard.select_preset(DeficitPreset::Aggressive);
        assert_eq!(wizard.raw(InputStep::Deficit), Some(700.0));

        wizard.set_input_text(InputStep::Deficit, "450");
        assert_eq!(wizard.selected_preset(), None);
        assert_eq!(wizard.raw(InputStep::Deficit), Some(450.0));
    }

    #[test]
    fn test_unparsable_text_leaves_field_empty() {
        let mut wizard = Wizard::new();
        wizard.set_input_text(InputStep::Weight, "");
        assert_eq!(wizard.raw(InputStep::Weight), None);
        wizard.set_input_text(InputStep::Weight, ".");
        assert_eq!(wizard.raw(InputStep::Weight), None);
        wizard.set_input_text(InputStep::Weight, " 72.5 ");
        assert_eq!(wizard.raw(InputStep::Weight), Some(72.5));
    }

    #[test]
    fn test_earlier_field_invalidated_before_compute() {
        let mut wizard = Wizard::new();
        wizard.set_input(InputStep::Weight, Some(80.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::BodyFat, Some(25.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::TargetDrop, Some(5.0));
        wizard.advance().unwrap();
        wizard.set_input(InputStep::Deficit, Some(500.0));
        wizard.set_input(InputStep::BodyFat, Some(100.0));

        assert_eq!(wizard.advance(), Err(InputError::BodyFat));
        assert_eq!(wizard.input_step(), Some(InputStep::Deficit));
        assert!(wizard.estimate().is_none());
    }

    #[test]
    fn test_progress() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.progress_percent(), 0);
        wizard.set_input(InputStep::Weight, Some(80.0));
        wizard.advance().unwrap();
        assert_eq!(wizard.progress_percent(), 25);
    }

    #[test]
    fn test_advance_on_results_is_noop() {
        let mut wizard = Wizard::new();
        fill_to_results(&mut wizard);
        let before = wizard.clone();
        assert_eq!(wizard.advance(), Ok(()));
        assert_eq!(wizard, before);
    }
}

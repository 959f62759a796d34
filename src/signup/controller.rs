//! Form state for one mounted sign-up form.
//!
//! The presentation layer owns a `FormController` and only mutates it through
//! `set_field`, `submit` (or `begin_submit`/`finish_submit`) and `reset`. It
//! reads back values, per-field errors, the strength feedback and the
//! `submitting` flag to render the form.

use super::{
    fields::{Field, FieldError, SignUpInput},
    strength::{classify, StrengthLabel},
    submit::Submitter,
    validator::{validate, ValidationResult},
};
use tracing::{debug, info, warn};

/// Why a submission did not reach the collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// At least one field failed validation; errors are stored on the controller.
    Invalid,
    /// A previous submission is still in flight.
    Busy,
}

#[derive(Debug)]
pub enum SubmitStatus {
    Rejected(Rejection),
    Delivered,
    /// The collaborator failed. The controller does not interpret the error.
    Failed(anyhow::Error),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    input: SignUpInput,
    errors: ValidationResult,
    strength: StrengthLabel,
    password_entered: bool,
    submitting: bool,
}

impl FormController {
    /// Empty form, as on mount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the mounted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        if field == Field::Password {
            self.strength = classify(&value);
            self.password_entered = !value.is_empty();
            debug!(
                strength = %self.strength,
                password_entered = self.password_entered,
                "password updated"
            );
        } else {
            debug!(field = %field, "field updated");
        }

        self.input.set(field, value);
    }

    /// Like `set_field`, with the field given by its wire name.
    ///
    /// # Errors
    /// Returns `FieldError::Unknown` if `name` is not a form field.
    pub fn set_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate and, when valid, mark the form as submitting.
    ///
    /// Returns a snapshot of the input to hand to the collaborator. The caller
    /// must call `finish_submit` once the collaborator returns.
    ///
    /// # Errors
    /// Returns `Rejection::Busy` while a submission is in flight and
    /// `Rejection::Invalid` when any field fails validation.
    pub fn begin_submit(&mut self) -> Result<SignUpInput, Rejection> {
        if self.submitting {
            debug!("submit ignored, already submitting");
            return Err(Rejection::Busy);
        }

        self.errors = validate(&self.input);
        if !self.errors.is_valid() {
            debug!(errors = self.errors.len(), "sign-up form rejected");
            return Err(Rejection::Invalid);
        }

        self.submitting = true;
        Ok(self.input.clone())
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Validate and hand the input to `submitter` exactly once if it is valid.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> SubmitStatus {
        let input = match self.begin_submit() {
            Ok(input) => input,
            Err(rejection) => return SubmitStatus::Rejected(rejection),
        };

        info!(email = %input.email, "submitting sign-up form");
        let result = submitter.submit(&input);
        self.finish_submit();

        match result {
            Ok(()) => SubmitStatus::Delivered,
            Err(err) => {
                warn!("sign-up submission failed: {err:#}");
                SubmitStatus::Failed(err)
            }
        }
    }

    #[must_use]
    pub fn input(&self) -> &SignUpInput {
        &self.input
    }

    /// Errors from the last submit attempt.
    #[must_use]
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.error(field)
    }

    #[must_use]
    pub fn strength(&self) -> StrengthLabel {
        self.strength
    }

    /// Strength label to display, hidden while the password field is empty.
    #[must_use]
    pub fn strength_feedback(&self) -> Option<StrengthLabel> {
        self.password_entered.then_some(self.strength)
    }

    #[must_use]
    pub fn password_entered(&self) -> bool {
        self.password_entered
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

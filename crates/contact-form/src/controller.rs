//! Form controller
//!
//! Owns one form's raw values, its visible errors and its submission state.
//! UI callbacks call [`FormController::on_field_change`] and
//! [`FormController::on_submit`]; the render layer reads a [`FormView`].
//!
//! Errors stay hidden until the first submit attempt. After that, every edit
//! re-runs the edited field's rules so its message clears or updates live.

use crate::client::SubmissionClient;
use crate::field::{Field, QueryType};
use crate::validation::{validate, validate_field, FieldErrors, ValidationResult};
use crate::values::{FieldInput, RawFormValues};
use tracing::{debug, error, info};

/// Where the form is in its edit/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Status of the most recent delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed { reason: String },
}

/// What a call to [`FormController::on_submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Blocked,
    /// The endpoint accepted the submission and the form was reset
    Sent,
    /// Delivery failed; values are kept for another attempt
    Failed,
}

/// Read-only snapshot handed to the render layer
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub values: &'a RawFormValues,
    pub errors: &'a FieldErrors,
    pub selected_query_type: Option<QueryType>,
    pub submitting: bool,
    pub submitted: bool,
    pub failure: Option<&'a str>,
}

/// State machine for a single contact form
pub struct FormController<C> {
    client: C,
    values: RawFormValues,
    errors: FieldErrors,
    phase: FormPhase,
    submission: SubmissionState,
    submit_attempted: bool,
    submitted: bool,
}

impl<C: SubmissionClient> FormController<C> {
    /// An empty form
    pub fn new(client: C) -> Self {
        Self::with_values(client, RawFormValues::default())
    }

    /// A form pre-filled with values, e.g. from a posted request body
    pub fn with_values(client: C, values: RawFormValues) -> Self {
        Self {
            client,
            values,
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            submission: SubmissionState::Idle,
            submit_attempted: false,
            submitted: false,
        }
    }

    pub fn values(&self) -> &RawFormValues {
        &self.values
    }

    /// Errors currently shown; empty before the first submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Set when the latest delivery was accepted; cleared when the next one starts
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Live radio selection, independent of validation
    pub fn selected_query_type(&self) -> Option<QueryType> {
        self.values.selected_query_type()
    }

    /// Whether the current values would pass validation right now
    pub fn is_valid(&self) -> bool {
        validate(&self.values).is_valid()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> FormView<'_> {
        let failure = match &self.submission {
            SubmissionState::Failed { reason } => Some(reason.as_str()),
            _ => None,
        };

        FormView {
            values: &self.values,
            errors: &self.errors,
            selected_query_type: self.selected_query_type(),
            submitting: self.phase == FormPhase::Submitting,
            submitted: self.submitted,
            failure,
        }
    }

    /// Apply one input event
    pub fn on_field_change(&mut self, input: FieldInput) {
        let field = input.field();
        self.values.apply(input);

        if self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Editing;
        }

        if !self.submit_attempted {
            return;
        }

        match validate_field(&self.values, field) {
            Some(message) => self.errors.insert(field, message),
            None => {
                self.errors.remove(field);
            }
        }
    }

    /// Validate and, if valid, deliver the form
    ///
    /// Taking `&mut self` means one controller can never have two submissions
    /// in flight.
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        self.submit_attempted = true;

        let values = match validate(&self.values) {
            ValidationResult::Valid(values) => values,
            ValidationResult::Invalid(errors) => {
                debug!(failed = errors.len(), "submission blocked by validation errors");
                self.errors = errors;
                return SubmitOutcome::Blocked;
            }
        };

        self.errors.clear();
        self.phase = FormPhase::Submitting;
        self.submission = SubmissionState::Submitting;
        // only the latest delivery's outcome is shown
        self.submitted = false;

        match self.client.send(&values).await {
            Ok(()) => {
                info!(query_type = %values.query_type, "contact form submitted");
                self.reset();
                self.phase = FormPhase::Submitted;
                self.submission = SubmissionState::Succeeded;
                self.submitted = true;
                SubmitOutcome::Sent
            }
            Err(err) => {
                error!(error = %err, "Submission error");
                self.phase = FormPhase::Editing;
                self.submission = SubmissionState::Failed {
                    reason: err.to_string(),
                };
                SubmitOutcome::Failed
            }
        }
    }

    /// Clear all values, errors and the submit-attempted flag
    ///
    /// The `submitted` flag survives a reset so the success notice stays up.
    pub fn reset(&mut self) {
        self.values = RawFormValues::default();
        self.errors.clear();
        self.submit_attempted = false;
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }
}

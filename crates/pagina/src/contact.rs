//! Contact form handler
//!
//! Validates the form on submit and, when every field passes, sends it through a
//! [`Transport`]. The submit control stays disabled while the request is in
//! flight and is restored by [`BusyGuard`] on every exit path.

use pagina_validation::{validate_contact, Field, FormFields};
use tracing::{debug, warn};

use crate::config::{ClassNames, Messages, PageConfig};
use crate::dom::{Button, ContactElements};
use crate::response::{interpret_response, SubmissionOutcome};
use crate::transport::{SubmitRequest, Transport};

/// Localized validation errors, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub first_invalid: Option<Field>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages, one per line
    pub fn message(&self) -> String {
        self.errors.join("\n")
    }
}

/// What a single submit event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Blocked before any request was made
    Invalid(ValidationResult),
    Sent(SubmissionOutcome),
}

/// Disables the submit control and shows the in-progress label until dropped
pub struct BusyGuard<'a> {
    button: &'a dyn Button,
    label: String,
}

impl<'a> BusyGuard<'a> {
    pub fn engage(button: &'a dyn Button, busy_label: &str) -> Self {
        let label = button.label();
        button.set_disabled(true);
        button.set_label(busy_label);
        Self { button, label }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.set_disabled(false);
        self.button.set_label(&self.label);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Error,
    Success,
}

pub struct ContactFormHandler<T> {
    elements: ContactElements,
    transport: T,
    classes: ClassNames,
    messages: Messages,
}

impl<T: Transport> ContactFormHandler<T> {
    pub fn new(elements: ContactElements, transport: T, config: &PageConfig) -> Self {
        Self {
            elements,
            transport,
            classes: config.classes.clone(),
            messages: config.messages.clone(),
        }
    }

    /// Check every field and translate the failures
    pub fn validate(&self, fields: &FormFields) -> ValidationResult {
        let failures = validate_contact(fields);
        ValidationResult {
            first_invalid: failures.first().map(|e| e.field()),
            errors: failures
                .iter()
                .map(|e| self.messages.for_error(e).to_string())
                .collect(),
        }
    }

    /// Handle one submit event
    ///
    /// The caller has already prevented the browser's own submission.
    pub async fn submit(&self) -> SubmitResult {
        self.clear_status();

        let fields = self.elements.read_fields();
        let validation = self.validate(&fields);

        if !validation.is_valid() {
            debug!("Contact form blocked: {} invalid field(s)", validation.errors.len());
            if let Some(field) = validation.first_invalid {
                self.elements.input(field).focus();
            }
            self.show_status(&validation.message(), StatusKind::Error);
            return SubmitResult::Invalid(validation);
        }

        let outcome = {
            let _busy = BusyGuard::engage(self.elements.submit.as_ref(), &self.messages.sending);

            let request = SubmitRequest::from_form(self.elements.form.as_ref());
            debug!("Sending contact form to {}", request.action);

            let outcome = match self.transport.post_form(&request).await {
                Ok(response) => interpret_response(&response, &self.messages),
                Err(e) => SubmissionOutcome::Failed {
                    reason: e.to_string(),
                },
            };

            self.render_outcome(&outcome);
            outcome
        };

        SubmitResult::Sent(outcome)
    }

    fn render_outcome(&self, outcome: &SubmissionOutcome) {
        let text = outcome.status_text(&self.messages);
        match outcome {
            SubmissionOutcome::Success => {
                debug!("Contact form sent");
                self.show_status(&text, StatusKind::Success);
                self.elements.form.reset();
            }
            SubmissionOutcome::Rejected { status, message } => {
                warn!("Contact form rejected with status {}: {}", status, message);
                self.show_status(&text, StatusKind::Error);
            }
            SubmissionOutcome::Failed { reason } => {
                warn!("Contact form not sent: {}", reason);
                self.show_status(&text, StatusKind::Error);
            }
        }
    }

    fn clear_status(&self) {
        let status = &self.elements.status;
        status.set_text("");
        status.set_visible(false);
        status.set_class_name(&self.classes.status_base);
    }

    fn show_status(&self, text: &str, kind: StatusKind) {
        let status = &self.elements.status;
        status.set_text(text);
        status.set_class(&self.classes.error, kind == StatusKind::Error);
        status.set_class(&self.classes.success, kind == StatusKind::Success);
        status.set_visible(true);
    }
}

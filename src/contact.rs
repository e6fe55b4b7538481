//! Contact form state machine.
//!
//! ```text
//! Editing ──Submit──▶ Validating ──invalid──▶ Editing (errors set)
//!                          │
//!                          └──valid──▶ Submitting ──Resolved(Ok)──▶ Succeeded
//!                                          │                       (values cleared)
//!                                          └──Resolved(Err)──▶ Failed (values kept)
//! ```
//!
//! Validation only runs on submit. Editing a field clears that field's error
//! and nothing else.

use crate::submit::{Phase, SubmissionError, SubmissionSink, SubmitResult};
use crate::validate::{self, ContactPayload, Field, ValidationError};
use std::collections::BTreeMap;

#[derive(Debug)]
pub enum FormEvent {
    Edit { field: Field, value: String },
    Submit,
    Resolved(Result<(), SubmissionError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Hand the payload to the submission sink and report back with
    /// [`FormEvent::Resolved`].
    Send(ContactPayload),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    values: ContactPayload,
    errors: BTreeMap<Field, ValidationError>,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactPayload {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &BTreeMap<Field, ValidationError> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn submit_result(&self) -> SubmitResult {
        self.phase.result()
    }

    pub fn update(&mut self, event: FormEvent) -> Option<FormEffect> {
        match event {
            FormEvent::Edit { field, value } => {
                if self.submitting() {
                    tracing::debug!(%field, "edit ignored while submitting");
                    return None;
                }
                self.values.set(field, value);
                self.errors.remove(&field);
                self.phase = Phase::Editing;
                None
            }
            FormEvent::Submit => {
                if self.submitting() {
                    tracing::debug!("submit ignored, a submission is already in flight");
                    return None;
                }
                let errors = validate::contact(&self.values);
                if !errors.is_empty() {
                    self.errors = errors;
                    self.phase = Phase::Editing;
                    return None;
                }
                self.errors.clear();
                self.phase = Phase::Submitting;
                Some(FormEffect::Send(self.values.clone()))
            }
            FormEvent::Resolved(outcome) => {
                if !self.submitting() {
                    tracing::warn!("submission outcome arrived with nothing in flight");
                    return None;
                }
                self.phase = match outcome {
                    Ok(()) => {
                        self.values = ContactPayload::default();
                        Phase::Succeeded
                    }
                    Err(err) => {
                        tracing::warn!(%err, "contact submission failed");
                        Phase::Failed(err.to_string())
                    }
                };
                None
            }
        }
    }

    /// Convenience for hosts with a synchronous sink: submit, deliver, resolve.
    pub fn submit_with<S: SubmissionSink<ContactPayload>>(&mut self, sink: &S) -> &Phase {
        if let Some(FormEffect::Send(payload)) = self.update(FormEvent::Submit) {
            let outcome = sink.submit(&payload);
            self.update(FormEvent::Resolved(outcome));
        }
        &self.phase
    }
}

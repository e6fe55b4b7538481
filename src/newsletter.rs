//! Footer newsletter signup: one email field, same lifecycle as the contact
//! form.

use crate::submit::{Phase, SubmissionError, SubmissionSink, SubmitResult};
use crate::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
}

#[derive(Debug)]
pub enum NewsletterEvent {
    Edit(String),
    Submit,
    Resolved(Result<(), SubmissionError>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    email: String,
    error: Option<ValidationError>,
    phase: Phase,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn submit_result(&self) -> SubmitResult {
        self.phase.result()
    }

    /// Returns the subscription to send when the submit was accepted.
    pub fn update(&mut self, event: NewsletterEvent) -> Option<Subscription> {
        match event {
            NewsletterEvent::Edit(value) => {
                if self.phase.is_submitting() {
                    return None;
                }
                self.email = value;
                self.error = None;
                self.phase = Phase::Editing;
                None
            }
            NewsletterEvent::Submit => {
                if self.phase.is_submitting() {
                    return None;
                }
                if let Err(e) = validate::email(&self.email) {
                    self.error = Some(e);
                    self.phase = Phase::Editing;
                    return None;
                }
                self.error = None;
                self.phase = Phase::Submitting;
                Some(Subscription {
                    email: self.email.trim().to_string(),
                })
            }
            NewsletterEvent::Resolved(outcome) => {
                if !self.phase.is_submitting() {
                    return None;
                }
                self.phase = match outcome {
                    Ok(()) => {
                        self.email.clear();
                        Phase::Succeeded
                    }
                    Err(err) => Phase::Failed(err.to_string()),
                };
                None
            }
        }
    }

    pub fn submit_with<S: SubmissionSink<Subscription>>(&mut self, sink: &S) -> &Phase {
        if let Some(subscription) = self.update(NewsletterEvent::Submit) {
            let outcome = sink.submit(&subscription);
            self.update(NewsletterEvent::Resolved(outcome));
        }
        &self.phase
    }
}

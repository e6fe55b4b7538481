//! Submission lifecycle and the sink abstraction both forms submit through.
//!
//! A form never performs I/O itself. Its `Submit` transition returns a
//! `Send` effect carrying the payload and parks in [`Phase::Submitting`]; the
//! host hands the payload to a [`SubmissionSink`] and feeds the outcome back.
//! That hand-off is the single suspend point of the page. There is no
//! cancellation and no timeout: the sink resolves exactly once, with success
//! or failure.
//!
//! [`Outbox`] is the sink the CLI uses. It appends one JSON object per line to
//! a file, standing in for whatever backend the hosting environment provides.

use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Submission was rejected: {0}")]
    Rejected(String),
    #[error("Submission could not be stored: {0}")]
    Io(#[from] std::io::Error),
    #[error("Submission could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where a form is in its submit lifecycle.
///
/// `Validating` and `Invalid` are instantaneous inside the submit transition
/// and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    /// Page-level failure message; values are kept for a retry.
    Failed(String),
}

/// Outcome of the last submission as shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    None,
    Success,
    Failure,
}

impl Phase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting)
    }

    pub fn result(&self) -> SubmitResult {
        match self {
            Phase::Editing | Phase::Submitting => SubmitResult::None,
            Phase::Succeeded => SubmitResult::Success,
            Phase::Failed(_) => SubmitResult::Failure,
        }
    }
}

/// Accepts a payload and reports success or failure.
pub trait SubmissionSink<P> {
    fn submit(&self, payload: &P) -> Result<(), SubmissionError>;
}

impl<P, F> SubmissionSink<P> for F
where
    F: Fn(&P) -> Result<(), SubmissionError>,
{
    fn submit(&self, payload: &P) -> Result<(), SubmissionError> {
        self(payload)
    }
}

/// Append-only JSON-lines file.
#[derive(Debug, Clone)]
pub struct Outbox {
    path: PathBuf,
}

#[derive(Serialize)]
struct Envelope<'a, P> {
    received_at: u64,
    #[serde(flatten)]
    payload: &'a P,
}

impl Outbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<P: Serialize> SubmissionSink<P> for Outbox {
    fn submit(&self, payload: &P) -> Result<(), SubmissionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let received_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let mut line = serde_json::to_string(&Envelope {
            received_at,
            payload,
        })?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        tracing::info!(path = %self.path.display(), "submission stored");
        Ok(())
    }
}

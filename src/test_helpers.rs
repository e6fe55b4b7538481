//! Shared test utilities for the qalimtech-site test suite.
//!
//! Provides a fixture site copied into a temp directory, a stock page layout
//! for navigation tests, a contact form builder, and fake submission sinks
//! that count how often they were called.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut form = fill_contact("Ada", "ada@farm.ng", "", "Two crates of eggs");
//! let sink = accept_all();
//! form.submit_with(&sink);
//! assert_eq!(sink.calls(), 1);
//! ```

use std::cell::Cell;
use std::path::Path;
use tempfile::TempDir;

use crate::contact::{ContactForm, FormEvent};
use crate::section::{PageLayout, SectionId};
use crate::submit::{SubmissionError, SubmissionSink};
use crate::validate::Field;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Layout
// =========================================================================

/// The stock document order stacked top to bottom (5500px tall).
///
/// ```text
/// home          0 .. 1000
/// about      1000 .. 1800
/// gallery    1800 .. 2700
/// products   2700 .. 3800
/// testimonials 3800 .. 4500
/// contact    4500 .. 5500
/// ```
pub fn stock_layout() -> PageLayout {
    PageLayout::stacked(&[
        (SectionId::Home, 1000.0),
        (SectionId::About, 800.0),
        (SectionId::Gallery, 900.0),
        (SectionId::Products, 1100.0),
        (SectionId::Testimonials, 700.0),
        (SectionId::Contact, 1000.0),
    ])
}

// =========================================================================
// Forms
// =========================================================================

/// A contact form with every field typed in, not yet submitted.
pub fn fill_contact(name: &str, email: &str, phone: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    for (field, value) in [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Phone, phone),
        (Field::Message, message),
    ] {
        form.update(FormEvent::Edit {
            field,
            value: value.to_string(),
        });
    }
    form
}

/// Sink that either accepts or rejects everything and counts deliveries.
pub struct FakeSink {
    accept: bool,
    calls: Cell<usize>,
}

impl FakeSink {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<P> SubmissionSink<P> for FakeSink {
    fn submit(&self, _payload: &P) -> Result<(), SubmissionError> {
        self.calls.set(self.calls.get() + 1);
        if self.accept {
            Ok(())
        } else {
            Err(SubmissionError::Rejected("service unavailable".into()))
        }
    }
}

pub fn accept_all() -> FakeSink {
    FakeSink {
        accept: true,
        calls: Cell::new(0),
    }
}

pub fn reject_all() -> FakeSink {
    FakeSink {
        accept: false,
        calls: Cell::new(0),
    }
}

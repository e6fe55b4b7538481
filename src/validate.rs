//! Field rules shared by the contact and newsletter forms.
//!
//! Rules run on submit only. Each check is a plain function over the raw
//! input so the rendered page, the CLI and the state machines agree on what
//! counts as valid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Per-field validation failure. The message is shown inline next to the
/// offending input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Phone number is invalid")]
    PhoneInvalid,
}

/// Contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Element id / form control name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What the contact form hands to a submission sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactPayload {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

const PHONE_MIN_LEN: usize = 7;
const PHONE_MAX_LEN: usize = 20;

/// Validate every contact field; the map holds exactly the failing ones.
pub fn contact(payload: &ContactPayload) -> BTreeMap<Field, ValidationError> {
    let mut errors = BTreeMap::new();
    if let Err(e) = name(&payload.name) {
        errors.insert(Field::Name, e);
    }
    if let Err(e) = email(&payload.email) {
        errors.insert(Field::Email, e);
    }
    if let Err(e) = phone(&payload.phone) {
        errors.insert(Field::Phone, e);
    }
    if let Err(e) = message(&payload.message) {
        errors.insert(Field::Message, e);
    }
    errors
}

pub fn name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

pub fn message(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MessageRequired);
    }
    Ok(())
}

/// `local@domain.tld`: no whitespace, a non-empty local part, and a domain
/// containing a dot with text on both sides of the last one.
pub fn email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::EmailInvalid);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::EmailInvalid);
    };
    let has_tld = domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || !has_tld {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Optional. When present: 7 to 20 characters of digits, spaces, `-`, `(`
/// and `)`, with at most one `+` and only in leading position.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let len = value.chars().count();
    if !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&len) {
        return Err(ValidationError::PhoneInvalid);
    }
    let body = value.strip_prefix('+').unwrap_or(value);
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')');
    if !body.chars().all(allowed) {
        return Err(ValidationError::PhoneInvalid);
    }
    Ok(())
}

//! Field rules for the sign-up form.
//!
//! Every field is checked on its own and all failures are collected, so the
//! form can show every message at once. The password match is only checked
//! after both password fields pass their length rule.

use super::fields::{Field, SignUpInput};
use regex::Regex;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const NAME_REQUIRED: &str = "Name is required and must be at least 3 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const CONFIRM_PASSWORD_TOO_SHORT: &str = "Confirm password must be at least 8 characters";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

/// Error messages from one validation pass, keyed by field. A missing key means
/// the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Email syntax check.
///
/// The local part may not start with a dot and the address may not contain
/// `..`. Domain labels start with a letter or digit and the top-level domain has
/// at least two letters.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .is_ok_and(|regex| regex.is_match(email))
}

/// Run every field rule against the input.
#[must_use]
pub fn validate(input: &SignUpInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    if input.name.trim().chars().count() < NAME_MIN_LENGTH {
        result.insert(Field::Name, NAME_REQUIRED);
    }

    if !valid_email(&input.email) {
        result.insert(Field::Email, EMAIL_REQUIRED);
    }

    let password = input.password.expose_secret();
    let confirm_password = input.confirm_password.expose_secret();

    let password_ok = password.chars().count() >= PASSWORD_MIN_LENGTH;
    if !password_ok {
        result.insert(Field::Password, PASSWORD_TOO_SHORT);
    }

    let confirm_ok = confirm_password.chars().count() >= PASSWORD_MIN_LENGTH;
    if !confirm_ok {
        result.insert(Field::ConfirmPassword, CONFIRM_PASSWORD_TOO_SHORT);
    }

    if password_ok && confirm_ok && password != confirm_password {
        result.insert(Field::ConfirmPassword, PASSWORDS_DONT_MATCH);
    }

    result
}

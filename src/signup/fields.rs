//! Form field keys and the values collected by the sign-up form.

use secrecy::SecretString;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// One named input of the sign-up form.
///
/// Declaration order is the display order, and `ValidationResult` iterates in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Wire name used by the form (`confirmPassword`, not `confirm_password`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Unknown(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Unknown(name) => write!(formatter, "unknown form field: {name}"),
        }
    }
}

impl std::error::Error for FieldError {}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirmPassword" | "confirm_password" | "confirm-password" => {
                Ok(Self::ConfirmPassword)
            }
            other => Err(FieldError::Unknown(other.to_string())),
        }
    }
}

/// Values typed into the form. Every field is always present; before any input
/// they are empty strings.
///
/// Password values never leave this struct through `Debug` or serialization.
#[derive(Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password: SecretString,
    #[serde(skip)]
    pub confirm_password: SecretString,
}

impl SignUpInput {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = SecretString::from(value),
            Field::ConfirmPassword => self.confirm_password = SecretString::from(value),
        }
    }
}

impl fmt::Debug for SignUpInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

//! # Signup (form validation core)
//!
//! `signup` holds the client-side logic behind a sign-up form: field validation,
//! live password strength feedback, and the submit flow that hands valid input to
//! an authentication backend.
//!
//! ## Validation
//!
//! Each field is checked independently (`name`, `email`, `password`,
//! `confirmPassword`). When both password fields pass their length rule they must
//! also match exactly; a mismatch is reported on `confirmPassword`. Errors are
//! plain data in a [`ValidationResult`](signup::ValidationResult), never panics or
//! `Err` values.
//!
//! ## Password Strength
//!
//! The strength label (`Too Weak`, `Weak`, `Medium`, `Strong`) is advisory
//! feedback only. It never gates a submission.
//!
//! ## Submission
//!
//! The backend is injected through the [`Submitter`](signup::Submitter) trait.
//! The default [`LogSubmitter`](signup::LogSubmitter) only logs the non-secret
//! fields. Passwords are held as `SecretString` and are redacted from `Debug`
//! output and logs.

pub mod cli;
pub mod signup;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

//! Submission seam between the form and the authentication backend.
//!
//! The form calls a `Submitter` exactly once per valid submission and only
//! reports its result back. Retries, timeouts and error surfacing belong to the
//! implementation.
//!
//! The default `LogSubmitter` logs the non-secret fields and returns `Ok(())`.

use super::fields::SignUpInput;
use anyhow::{Context, Result};
use tracing::info;

/// Authentication backend abstraction used by the form controller.
pub trait Submitter: Send + Sync {
    /// Hand the validated input to the backend.
    ///
    /// # Errors
    /// Returns an error if the backend rejects or fails to accept the input.
    fn submit(&self, input: &SignUpInput) -> Result<()>;
}

/// Local dev submitter that logs the payload instead of creating an account.
#[derive(Clone, Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, input: &SignUpInput) -> Result<()> {
        let payload =
            serde_json::to_string(input).context("failed to serialize sign-up payload")?;
        info!(
            name = %input.name,
            email = %input.email,
            payload = %payload,
            "sign-up submit stub"
        );
        Ok(())
    }
}

use crate::signup::{
    Field, FormController, LogSubmitter, Rejection, StrengthLabel, SubmitStatus, Submitter,
    ValidationResult,
};
use anyhow::{anyhow, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub json: bool,
}

/// What the form shows after a submit attempt.
#[derive(Debug, Serialize)]
struct Report<'a> {
    strength: Option<StrengthLabel>,
    errors: &'a ValidationResult,
    submitted: bool,
}

/// Run the sign-up form with the default submitter and print the report to stdout.
///
/// # Errors
/// Returns an error if validation fails, the submitter fails, or writing the
/// report fails.
pub fn execute(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_with(args, &LogSubmitter, &mut out)
}

fn execute_with(args: Args, submitter: &dyn Submitter, out: &mut impl Write) -> Result<()> {
    let json = args.json;

    let mut form = FormController::new();
    form.set_field(Field::Name, args.name);
    form.set_field(Field::Email, args.email);
    form.set_field(Field::Password, args.password.expose_secret());
    form.set_field(Field::ConfirmPassword, args.confirm_password.expose_secret());

    let status = form.submit(submitter);

    let report = Report {
        strength: form.strength_feedback(),
        errors: form.errors(),
        submitted: status.is_delivered(),
    };

    if json {
        let body = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        writeln!(out, "{body}")?;
    } else {
        write_text(&report, &form.input().email, out)?;
    }

    match status {
        SubmitStatus::Delivered => Ok(()),
        SubmitStatus::Rejected(Rejection::Invalid) => Err(anyhow!(
            "sign-up form has {} invalid field(s)",
            form.errors().len()
        )),
        SubmitStatus::Rejected(Rejection::Busy) => Err(anyhow!("sign-up already in progress")),
        SubmitStatus::Failed(err) => Err(err.context("sign-up submission failed")),
    }
}

fn write_text(report: &Report<'_>, email: &str, out: &mut impl Write) -> Result<()> {
    if let Some(label) = report.strength {
        writeln!(out, "{}", label.message())?;
    }

    for (field, message) in report.errors.iter() {
        writeln!(out, "{field}: {message}")?;
    }

    if report.submitted {
        writeln!(out, "Sign-up submitted for {email}")?;
    }

    Ok(())
}

use crate::signup::{classify, StrengthLabel, Tone};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub password: SecretString,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    strength: StrengthLabel,
    tone: Tone,
}

/// Classify the password and print its strength label.
///
/// # Errors
/// Returns an error if writing to stdout fails.
pub fn execute(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_with(&args, &mut out)
}

fn execute_with(args: &Args, out: &mut impl Write) -> Result<()> {
    let strength = classify(args.password.expose_secret());
    debug!(strength = %strength, "password classified");

    if args.json {
        let report = Report {
            strength,
            tone: strength.tone(),
        };
        let body = serde_json::to_string(&report).context("failed to encode report")?;
        writeln!(out, "{body}")?;
    } else {
        writeln!(out, "{}", strength.message())?;
    }

    Ok(())
}

//! Maps validated CLI arguments to the action to run.

use crate::cli::actions::{register, strength, Action};
use crate::cli::commands::{register::CMD_REGISTER, strength::CMD_STRENGTH};
use anyhow::{anyhow, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_REGISTER, sub_m)) => {
            let options = crate::cli::commands::register::Options::parse(sub_m);
            Ok(Action::Register(register::Args {
                name: options.name,
                email: options.email,
                password: options.password,
                confirm_password: options.confirm_password,
                json: options.json,
            }))
        }
        Some((CMD_STRENGTH, sub_m)) => {
            let options = crate::cli::commands::strength::Options::parse(sub_m);
            Ok(Action::Strength(strength::Args {
                password: options.password,
                json: options.json,
            }))
        }
        Some((other, _)) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

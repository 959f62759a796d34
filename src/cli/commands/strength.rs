use super::register::{json_arg, password_arg, ARG_JSON, ARG_PASSWORD};
use clap::{ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_STRENGTH: &str = "strength";

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_STRENGTH)
        .about("Show the strength label of a password")
        .arg(password_arg())
        .arg(json_arg())
}

pub struct Options {
    pub password: SecretString,
    pub json: bool,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            password: SecretString::from(
                matches
                    .get_one::<String>(ARG_PASSWORD)
                    .cloned()
                    .unwrap_or_default(),
            ),
            json: matches.get_flag(ARG_JSON),
        }
    }
}
